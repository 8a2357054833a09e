use polars::prelude::*;

/// Expected schema for the observation frame
pub struct ObservationSchema;

impl ObservationSchema {
    /// Get the canonical observation schema
    pub fn schema() -> Schema {
        Schema::from_iter(vec![
            Field::new("timestamp".into(), DataType::Datetime(TimeUnit::Milliseconds, None)),
            Field::new("value".into(), DataType::Int32),
            Field::new("classification".into(), DataType::String),
            Field::new("short_ma".into(), DataType::Float64),
            Field::new("long_ma".into(), DataType::Float64),
            Field::new("volatility".into(), DataType::Float64),
        ])
    }

    /// Validate DataFrame against schema
    pub fn validate(df: &DataFrame) -> Result<(), SchemaError> {
        let expected = Self::schema();
        let actual = df.schema();

        for field in expected.iter_fields() {
            let actual_dtype = actual
                .get(field.name())
                .ok_or_else(|| SchemaError::MissingColumn(field.name().to_string()))?;
            if actual_dtype != field.dtype() {
                return Err(SchemaError::TypeMismatch {
                    column: field.name().to_string(),
                    expected: field.dtype().clone(),
                    actual: actual_dtype.clone(),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Type mismatch in column {column}: expected {expected:?}, got {actual:?}")]
    TypeMismatch {
        column: String,
        expected: DataType,
        actual: DataType,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamp_column() -> Column {
        Series::new("timestamp".into(), &[1_700_000_000_000i64])
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
            .unwrap()
            .into()
    }

    #[test]
    fn test_schema_has_all_required_columns() {
        let schema = ObservationSchema::schema();
        for name in ["timestamp", "value", "classification", "short_ma", "long_ma", "volatility"] {
            assert!(schema.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_validate_rejects_missing_column() {
        let df = DataFrame::new(vec![
            timestamp_column(),
            Series::new("value".into(), &[40i32]).into(),
        ])
        .unwrap();

        let result = ObservationSchema::validate(&df);
        assert!(matches!(result.unwrap_err(), SchemaError::MissingColumn(_)));
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let df = DataFrame::new(vec![
            timestamp_column(),
            Series::new("value".into(), &["forty"]).into(),
            Series::new("classification".into(), &["Fear"]).into(),
            Series::new("short_ma".into(), &[Some(40.0f64)]).into(),
            Series::new("long_ma".into(), &[None::<f64>]).into(),
            Series::new("volatility".into(), &[None::<f64>]).into(),
        ])
        .unwrap();

        let result = ObservationSchema::validate(&df);
        assert!(matches!(result.unwrap_err(), SchemaError::TypeMismatch { .. }));
    }
}
