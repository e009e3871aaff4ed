#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// User ID
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// ID of the company this user belongs to
    pub company_id: u64,
    /// Current token balance
    pub tokens: u64,
    /// Only active users are topped up and reported
    pub active_status: bool,
    /// Whether the user opted in to emails
    pub email_status: bool,
}

impl User {
    pub fn new(
        id: u64,
        first_name: String,
        last_name: String,
        email: String,
        company_id: u64,
        tokens: u64,
        active_status: bool,
        email_status: bool,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            company_id,
            tokens,
            active_status,
            email_status,
        }
    }

    pub fn can_receive_email(&self) -> bool {
        self.email_status
    }
}
