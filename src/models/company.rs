#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Company {
    /// Company ID
    pub id: u64,
    pub name: String,
    /// Tokens added to each active user of this company per run
    pub top_up: u64,
    /// Whether the company is allowed to send emails at all
    pub email_status: bool,
}

impl Company {
    pub fn new(id: u64, name: String, top_up: u64, email_status: bool) -> Self {
        Self {
            id,
            name,
            top_up,
            email_status,
        }
    }

    pub fn can_send_email(&self) -> bool {
        self.email_status
    }
}
