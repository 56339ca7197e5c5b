use serde::{de::Error, Deserialize, Deserializer};

/// reads a finite, non-negative number. NaN, infinities and negative values
/// are deserialization errors.
pub fn non_negative_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    check_non_negative(value).map_err(D::Error::custom)
}

/// as [non_negative_f64], with an empty field read as None.
pub fn optional_non_negative_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        Some(value) => check_non_negative(value).map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

fn check_non_negative(value: f64) -> Result<f64, String> {
    if !value.is_finite() {
        Err(format!("expected a finite number, found {value}"))
    } else if value < 0.0 {
        Err(format!("expected a non-negative number, found {value}"))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::csv_ops::deserialize_records;
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Row {
        #[serde(deserialize_with = "non_negative_f64")]
        required: f64,
        #[serde(default, deserialize_with = "optional_non_negative_f64")]
        optional: Option<f64>,
    }

    fn read(csv: &str) -> Vec<Result<Row, String>> {
        deserialize_records::<_, Row>(csv.as_bytes(), "rows.csv")
            .map(|r| r.map_err(|e| e.to_string()))
            .collect()
    }

    #[test]
    fn test_accepts_finite_non_negative() {
        let rows = read("required,optional\n0,2.5\n12.25,\n");
        let first = rows[0].as_ref().unwrap();
        assert_eq!(first.required, 0.0);
        assert_eq!(first.optional, Some(2.5));
        let second = rows[1].as_ref().unwrap();
        assert_eq!(second.optional, None);
    }

    #[test]
    fn test_rejects_non_finite_and_negative() {
        let rows = read("required,optional\nNaN,1\n-20,1\n1,inf\n1,-0.5\n");
        assert_eq!(rows.len(), 4);
        for row in rows {
            assert!(row.is_err(), "{row:?}");
        }
    }
}
