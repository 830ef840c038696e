use std::fmt;

/// 裝置在 mfc.js 中公開的讀數欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Flow,
    Pressure,
}

impl Field {
    /// `mfc.<name> = ...;` 中的變數名稱
    pub fn variable(&self) -> &'static str {
        match self {
            Field::Flow => "flow_value",
            Field::Pressure => "pressure_value",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Field::Flow => "Flow",
            Field::Pressure => "pressure",
        }
    }
}

/// 一次 HTTP 請求的原始結果
#[derive(Debug, Clone)]
pub struct Fetched {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldReading {
    Found(f64),
    Missing,
    /// 樣式符合但數字無法解析，例如 `1.2.3`
    Unparseable(String),
}

impl FieldReading {
    pub fn value(&self) -> Option<f64> {
        match self {
            FieldReading::Found(v) => Some(*v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub flow: FieldReading,
    pub pressure: FieldReading,
    pub mbar_divisor: f64,
}

impl Reading {
    pub fn pressure_mbar(&self) -> Option<f64> {
        self.pressure.value().map(|p| p / self.mbar_divisor)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Readings { resource: String, reading: Reading },
    FetchFailed { resource: String, status: u16 },
}

/// 與 Python `repr(float)` 相同的輸出：整數值保留 `.0`，
/// 指數一律帶正負號且至少兩位數（`1e-05`、`1e+16`）
pub fn format_float(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::FetchFailed { resource, status } => {
                writeln!(f, "Failed to fetch {}, status code: {}", resource, status)
            }
            Report::Readings { reading, .. } => {
                match &reading.flow {
                    FieldReading::Found(v) => writeln!(f, "Flow rate: {}", format_float(*v))?,
                    other => write_absent(f, Field::Flow, other)?,
                }
                match &reading.pressure {
                    FieldReading::Found(v) => {
                        writeln!(f, "pressure value: {}", format_float(*v))?;
                        writeln!(
                            f,
                            "pressure value in mbar: {}",
                            format_float(v / reading.mbar_divisor)
                        )?;
                    }
                    other => write_absent(f, Field::Pressure, other)?,
                }
                Ok(())
            }
        }
    }
}

fn write_absent(f: &mut fmt::Formatter<'_>, field: Field, reading: &FieldReading) -> fmt::Result {
    match reading {
        FieldReading::Unparseable(raw) => {
            writeln!(f, "{} value could not be parsed: '{}'", field.label(), raw)
        }
        _ => writeln!(
            f,
            "{} value not found in the JavaScript file.",
            field.label()
        ),
    }
}
