//! Linear classifiers over TF-IDF features.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VeritasError};
use crate::model::capability::{FeatureClassifier, MarginPipeline, ProbabilityPipeline, TextPipeline};
use crate::model::tfidf::TfIdfVectorizer;

/// Loss the linear model was trained with. Decides whether it can report
/// probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loss {
    /// Linear SVM: margins only.
    Hinge,
    /// Logistic regression: margins and probabilities.
    Log,
}

/// Binary linear model: `margin = w · x + b`.
///
/// A positive margin selects `classes[1]`, anything else `classes[0]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    weights: Vec<f64>,
    intercept: f64,
    classes: Vec<String>,
    loss: Loss,
}

impl LinearModel {
    pub fn new(weights: Vec<f64>, intercept: f64, classes: Vec<String>, loss: Loss) -> Result<Self> {
        let model = LinearModel {
            weights,
            intercept,
            classes,
            loss,
        };
        model.validate()?;
        Ok(model)
    }

    /// Check class count and that every coefficient is finite.
    pub fn validate(&self) -> Result<()> {
        if self.classes.len() != 2 {
            return Err(VeritasError::model(format!(
                "linear model needs exactly 2 classes, got {}",
                self.classes.len()
            )));
        }
        if !self.intercept.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err(VeritasError::model("linear model has non-finite coefficients"));
        }
        Ok(())
    }

    pub fn loss(&self) -> Loss {
        self.loss
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Signed distance of `features` to the decision boundary.
    pub fn decision_function(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.weights.len() {
            return Err(VeritasError::model(format!(
                "expected {} features, got {}",
                self.weights.len(),
                features.len()
            )));
        }
        let dot: f64 = self.weights.iter().zip(features).map(|(w, x)| w * x).sum();
        Ok(dot + self.intercept)
    }

    fn label_for(&self, margin: f64) -> String {
        let idx = if margin > 0.0 { 1 } else { 0 };
        self.classes[idx].clone()
    }

    fn probabilities(&self, margin: f64) -> Result<Vec<f64>> {
        match self.loss {
            Loss::Log => {
                let positive = 1.0 / (1.0 + (-margin).exp());
                Ok(vec![1.0 - positive, positive])
            }
            Loss::Hinge => Err(VeritasError::model(
                "hinge loss does not provide probability estimates",
            )),
        }
    }
}

impl FeatureClassifier for LinearModel {
    fn predict_features(&self, features: &[f64]) -> Result<String> {
        Ok(self.label_for(self.decision_function(features)?))
    }

    fn predict_proba_features(&self, features: &[f64]) -> Result<Vec<f64>> {
        self.probabilities(self.decision_function(features)?)
    }

    fn name(&self) -> &str {
        match self.loss {
            Loss::Hinge => "linear_svm",
            Loss::Log => "logistic_regression",
        }
    }
}

/// A TF-IDF vectorizer followed by a [`LinearModel`] classification stage.
#[derive(Debug, Clone)]
pub struct LinearPipeline {
    vectorizer: TfIdfVectorizer,
    classifier: LinearModel,
}

impl LinearPipeline {
    pub fn new(vectorizer: TfIdfVectorizer, classifier: LinearModel) -> Result<Self> {
        vectorizer.validate()?;
        classifier.validate()?;
        if vectorizer.vocabulary_size() != classifier.n_features() {
            return Err(VeritasError::model(format!(
                "vectorizer produces {} features but the classifier expects {}",
                vectorizer.vocabulary_size(),
                classifier.n_features()
            )));
        }
        Ok(LinearPipeline {
            vectorizer,
            classifier,
        })
    }

    /// The classification stage.
    pub fn classifier(&self) -> &LinearModel {
        &self.classifier
    }

    fn margin(&self, text: &str) -> Result<f64> {
        let features = self.vectorizer.transform(text)?;
        self.classifier.decision_function(&features)
    }
}

impl TextPipeline for LinearPipeline {
    fn predict(&self, text: &str) -> Result<String> {
        Ok(self.classifier.label_for(self.margin(text)?))
    }

    fn name(&self) -> &str {
        match self.classifier.loss {
            Loss::Hinge => "tfidf+linear_svm",
            Loss::Log => "tfidf+logistic_regression",
        }
    }
}

impl ProbabilityPipeline for LinearPipeline {
    fn predict_proba(&self, text: &str) -> Result<Vec<f64>> {
        self.classifier.probabilities(self.margin(text)?)
    }
}

impl MarginPipeline for LinearPipeline {
    fn decision_function(&self, text: &str) -> Result<f64> {
        self.margin(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> Vec<String> {
        vec!["FAKE".to_string(), "REAL".to_string()]
    }

    fn pipeline(loss: Loss) -> LinearPipeline {
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer
            .fit(&["hoax".to_string(), "study".to_string()])
            .unwrap();
        // Vocabulary order: hoax, study.
        let model = LinearModel::new(vec![-2.0, 2.0], 0.0, classes(), loss).unwrap();
        LinearPipeline::new(vectorizer, model).unwrap()
    }

    #[test]
    fn test_linear_model_validation() {
        assert!(LinearModel::new(vec![1.0], 0.0, vec!["only".to_string()], Loss::Log).is_err());
        assert!(LinearModel::new(vec![f64::NAN], 0.0, classes(), Loss::Log).is_err());
        assert!(LinearModel::new(vec![1.0], f64::INFINITY, classes(), Loss::Log).is_err());
    }

    #[test]
    fn test_decision_function() {
        let model = LinearModel::new(vec![1.0, -1.0], 0.5, classes(), Loss::Hinge).unwrap();
        assert_eq!(model.decision_function(&[2.0, 1.0]).unwrap(), 1.5);
        assert!(model.decision_function(&[1.0]).is_err());
        assert_eq!(model.predict_features(&[2.0, 1.0]).unwrap(), "REAL");
        assert_eq!(model.predict_features(&[0.0, 2.0]).unwrap(), "FAKE");
    }

    #[test]
    fn test_probabilities() {
        let model = LinearModel::new(vec![1.0], 0.0, classes(), Loss::Log).unwrap();
        let proba = model.predict_proba_features(&[0.0]).unwrap();
        assert_eq!(proba, vec![0.5, 0.5]);

        let proba = model.predict_proba_features(&[3.0]).unwrap();
        assert!(proba[1] > 0.95);
        assert!((proba.iter().sum::<f64>() - 1.0).abs() < 1e-12);

        let hinge = LinearModel::new(vec![1.0], 0.0, classes(), Loss::Hinge).unwrap();
        assert!(hinge.predict_proba_features(&[1.0]).is_err());
    }

    #[test]
    fn test_pipeline_predict() {
        let pipeline = pipeline(Loss::Hinge);
        assert_eq!(pipeline.predict("hoax").unwrap(), "FAKE");
        assert_eq!(pipeline.predict("study").unwrap(), "REAL");
        assert!(pipeline.decision_function("hoax").unwrap() < 0.0);
        assert_eq!(pipeline.name(), "tfidf+linear_svm");
    }

    #[test]
    fn test_pipeline_feature_mismatch() {
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&["hoax study moon".to_string()]).unwrap();
        let model = LinearModel::new(vec![1.0, 1.0], 0.0, classes(), Loss::Log).unwrap();
        assert!(LinearPipeline::new(vectorizer, model).is_err());
    }

    #[test]
    fn test_serde_loss_names() {
        assert_eq!(serde_json::to_string(&Loss::Hinge).unwrap(), "\"hinge\"");
        let loss: Loss = serde_json::from_str("\"log\"").unwrap();
        assert_eq!(loss, Loss::Log);
    }
}
