use crate::models::{company::Company, user::User};
use crate::report::render::render_report;
use std::collections::HashMap;
use tracing::debug;

/// One user line of a company section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry<'a> {
    pub user: &'a User,
    pub previous_balance: u64,
    /// Widened so `tokens + top_up` cannot overflow
    pub new_balance: u128,
}

/// A company with at least one active user, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySection<'a> {
    pub company: &'a Company,
    pub emailed: Vec<UserEntry<'a>>,
    pub not_emailed: Vec<UserEntry<'a>>,
    /// `top_up` times the number of active users, across both groups
    pub total_top_up: u128,
}

impl CompanySection<'_> {
    pub fn user_count(&self) -> usize {
        self.emailed.len() + self.not_emailed.len()
    }
}

/// Build the text report for validated users and companies.
///
/// Pure and deterministic: the same input always yields the same bytes.
/// Empty input yields an empty string.
pub fn process(users: &[User], companies: &[Company]) -> String {
    let sections = build_sections(users, companies);
    render_report(&sections)
}

/// Group active users under their company, in company id order.
///
/// Companies without active users are left out entirely.
pub fn build_sections<'a>(users: &'a [User], companies: &'a [Company]) -> Vec<CompanySection<'a>> {
    let active_by_company = index_active_users(users);

    let mut ordered: Vec<&Company> = companies.iter().collect();
    ordered.sort_by_key(|company| company.id);

    let sections: Vec<CompanySection<'a>> = ordered
        .into_iter()
        .filter_map(|company| {
            let members = active_by_company.get(&company.id)?;
            Some(build_section(company, members))
        })
        .collect();

    debug!(
        companies = companies.len(),
        users = users.len(),
        sections = sections.len(),
        "Report sections built"
    );

    sections
}

// Users keep their input order inside each bucket so the later stable sort
// breaks full-name ties by input position.
fn index_active_users(users: &[User]) -> HashMap<u64, Vec<&User>> {
    let mut index: HashMap<u64, Vec<&User>> = HashMap::new();
    for user in users.iter().filter(|user| user.active_status) {
        index.entry(user.company_id).or_default().push(user);
    }
    index
}

fn build_section<'a>(company: &'a Company, members: &[&'a User]) -> CompanySection<'a> {
    let (mut emailed, mut not_emailed): (Vec<UserEntry<'a>>, Vec<UserEntry<'a>>) = members
        .iter()
        .map(|&user| UserEntry {
            user,
            previous_balance: user.tokens,
            new_balance: u128::from(user.tokens) + u128::from(company.top_up),
        })
        .partition(|entry| company.can_send_email() && entry.user.can_receive_email());

    sort_by_name(&mut emailed);
    sort_by_name(&mut not_emailed);

    let total_top_up = u128::from(company.top_up) * members.len() as u128;

    CompanySection {
        company,
        emailed,
        not_emailed,
        total_top_up,
    }
}

fn sort_by_name(entries: &mut [UserEntry<'_>]) {
    entries.sort_by(|a, b| {
        a.user
            .last_name
            .cmp(&b.user.last_name)
            .then_with(|| a.user.first_name.cmp(&b.user.first_name))
    });
}
