use serde::Deserialize;

use super::Column;

/// One choice offered in both answer columns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub value: i32,
}

/// A question asking to classify two physical quantities independently.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub number: u32,
    pub text: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub options: Vec<AnswerOption>,
    pub physical_quantities: [String; 2],
}

impl Question {
    pub fn quantity(&self, column: Column) -> &str {
        &self.physical_quantities[column.index()]
    }

    /// Image URL, treating an empty string as absent.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn option_by_value(&self, value: i32) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_image_url_counts_as_absent() {
        let question: Question = serde_json::from_str(
            r#"{"number": 3, "text": "t", "imageUrl": "",
                "options": [{"label": "Low", "value": 1}],
                "physicalQuantities": ["Mass", "Speed"]}"#,
        )
        .unwrap();

        assert_eq!(question.image_url(), None);
        assert_eq!(question.quantity(Column::Second), "Speed");
    }

    #[test]
    fn missing_image_url_defaults_to_none() {
        let question: Question = serde_json::from_str(
            r#"{"number": 1, "text": "t",
                "options": [{"label": "Low", "value": 1}],
                "physicalQuantities": ["Mass", "Speed"]}"#,
        )
        .unwrap();

        assert!(question.image_url.is_none());
        assert_eq!(question.option_by_value(1).unwrap().label, "Low");
        assert!(question.option_by_value(2).is_none());
    }
}
