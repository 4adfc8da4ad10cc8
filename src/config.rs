use rust_decimal::Decimal;

/// The fixed scenario the demo binary runs
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub identifier: String,
    pub deposit: Decimal,
    pub withdraw: Decimal,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            identifier: "12345".to_string(),
            deposit: Decimal::from(500),
            withdraw: Decimal::from(200),
        }
    }
}
