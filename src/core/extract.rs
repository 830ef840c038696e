use crate::domain::model::{Field, FieldReading, Reading};
use crate::utils::error::Result;
use regex::Regex;

/// 從 mfc.js 內容中擷取 `mfc.<field> = <number>;` 賦值
#[derive(Debug, Clone)]
pub struct Extractor {
    flow: Regex,
    pressure: Regex,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            flow: Self::compile(Field::Flow)?,
            pressure: Self::compile(Field::Pressure)?,
        })
    }

    fn compile(field: Field) -> Result<Regex> {
        let pattern = format!(r"mfc\.{}\s*=\s*([\d\.]+);", regex::escape(field.variable()));
        Ok(Regex::new(&pattern)?)
    }

    fn pattern(&self, field: Field) -> &Regex {
        match field {
            Field::Flow => &self.flow,
            Field::Pressure => &self.pressure,
        }
    }

    /// 只取第一個符合的賦值
    pub fn extract(&self, body: &str, field: Field) -> FieldReading {
        let Some(raw) = self
            .pattern(field)
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            tracing::debug!("{} not present in body", field.variable());
            return FieldReading::Missing;
        };

        match raw.parse::<f64>() {
            Ok(value) if !value.is_finite() => {
                tracing::warn!("⚠️ {} matched '{}' but overflows a float", field.variable(), raw);
                FieldReading::Unparseable(raw.to_string())
            }
            Ok(value) => {
                tracing::debug!("{} = {}", field.variable(), value);
                FieldReading::Found(value)
            }
            Err(e) => {
                tracing::warn!("⚠️ {} matched '{}' but is not a number: {}", field.variable(), raw, e);
                FieldReading::Unparseable(raw.to_string())
            }
        }
    }

    pub fn read(&self, body: &str, mbar_divisor: f64) -> Reading {
        Reading {
            flow: self.extract(body, Field::Flow),
            pressure: self.extract(body, Field::Pressure),
            mbar_divisor,
        }
    }
}
