use netserve_config::OperatorAccount;

/// The signed-in operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub username: String,
    pub display_name: String,
}

impl From<&OperatorAccount> for Operator {
    fn from(account: &OperatorAccount) -> Self {
        Self {
            username: account.username.clone(),
            display_name: account.shown_name().to_string(),
        }
    }
}
