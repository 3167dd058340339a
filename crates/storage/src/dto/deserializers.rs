use serde::{Deserialize, Deserializer, de};

// The game front end posts category ids as strings ("3") while other
// clients send numbers, so both are accepted wherever an id is read.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

pub fn optional_int_or_string<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(value)) => i32::try_from(value)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("{value} is out of range"))),
        Some(IntOrString::Str(value)) => value
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| {
                de::Error::custom(format!("Wrong value {value}, can not parse to integer"))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "optional_int_or_string")]
        value: Option<i32>,
    }

    fn parse(json: &str) -> Result<Holder, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(r#"{"value": 4}"#).unwrap().value, Some(4));
        assert_eq!(parse(r#"{"value": "4"}"#).unwrap().value, Some(4));
        assert_eq!(parse(r#"{"value": " 12 "}"#).unwrap().value, Some(12));
    }

    #[test]
    fn test_null_and_missing_are_none() {
        assert_eq!(parse(r#"{"value": null}"#).unwrap().value, None);
        assert_eq!(parse("{}").unwrap().value, None);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse(r#"{"value": "science"}"#).is_err());
        assert!(parse(r#"{"value": 9999999999}"#).is_err());
        assert!(parse(r#"{"value": [1]}"#).is_err());
    }
}
