use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Questionnaire answers keyed by prompt text.
///
/// There is no fixed schema: which category a prompt belongs to is decided by
/// keyword matching at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseRecord(Map<String, Value>);

impl ResponseRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: impl Into<String>, answer: impl Into<Value>) {
        self.0.insert(question.into(), answer.into());
    }

    #[must_use]
    pub fn get(&self, question: &str) -> Option<&Value> {
        self.0.get(question)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ResponseRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ResponseRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Integer rating carried by an answer, or 0 when the answer is not a plain
/// run of decimal digits.
///
/// Strings of decimal digits from any script (`"5"`, `"５"`, `"٣"`) and unsigned
/// JSON integers are accepted. Floats, signed numbers, padded strings,
/// superscripts, booleans and null all rate 0. Ratings too large for `u64`
/// saturate.
#[must_use]
pub fn parse_rating(value: &Value) -> u64 {
    match value {
        Value::String(text) => parse_digits(text),
        Value::Number(number) => number.as_u64().unwrap_or(0),
        _ => 0,
    }
}

/// First code point of each run of ten Unicode decimal digits (category Nd).
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

fn decimal_digit(c: char) -> Option<u64> {
    if let Some(digit) = c.to_digit(10) {
        return Some(u64::from(digit));
    }
    let code = u32::from(c);
    DECIMAL_DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .map(|zero| u64::from(code - zero))
}

fn parse_digits(text: &str) -> u64 {
    if text.is_empty() {
        return 0;
    }
    let mut value = 0u64;
    for c in text.chars() {
        let Some(digit) = decimal_digit(c) else {
            return 0;
        };
        value = value.saturating_mul(10).saturating_add(digit);
    }
    value
}
