pub mod error;
pub mod options;
pub mod record;
pub mod trial;

pub use error::{DesignError, Result};
pub use options::{ColumnMap, ExtractionOptions, LoadOptions, NanPolicy, ShortConditionPolicy};
pub use record::{ConditionRecord, ParametricModulator};
pub use trial::{DesignTable, Trial};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_options_serialize() {
        let options = ExtractionOptions {
            conditions: vec!["face".to_string(), "house".to_string()],
            short_condition: ShortConditionPolicy::Remove,
            nan: NanPolicy::Ignore,
        };
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: ExtractionOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(round.conditions, options.conditions);
        assert_eq!(round.short_condition, ShortConditionPolicy::Remove);
        assert_eq!(round.nan, NanPolicy::Ignore);
    }

    #[test]
    fn policies_default_to_raise() {
        assert_eq!(ShortConditionPolicy::default(), ShortConditionPolicy::Raise);
        assert_eq!(NanPolicy::default(), NanPolicy::Raise);
    }
}
