use super::builder::{CompanySection, UserEntry};

/// Render all sections, one blank line between them
pub fn render_report(sections: &[CompanySection<'_>]) -> String {
    sections
        .iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one company section.
///
/// Both group headers are always present, a group with no users contributes
/// no lines, and the total line closes the section with no trailing newline.
pub fn render_section(section: &CompanySection<'_>) -> String {
    let capacity = 160 + section.user_count() * 120;
    let mut buf = String::with_capacity(capacity);
    let mut num = itoa::Buffer::new();

    buf.push_str("\tCompany Id: ");
    buf.push_str(num.format(section.company.id));
    buf.push('\n');

    buf.push_str("\tCompany Name: ");
    buf.push_str(&section.company.name);
    buf.push('\n');

    buf.push_str("\tUsers Emailed:\n");
    for entry in &section.emailed {
        render_user(entry, &mut buf, &mut num);
    }

    buf.push_str("\tUsers Not Emailed:\n");
    for entry in &section.not_emailed {
        render_user(entry, &mut buf, &mut num);
    }

    buf.push_str("\t\tTotal amount of top ups for ");
    buf.push_str(&section.company.name);
    buf.push_str(": ");
    buf.push_str(num.format(section.total_top_up));

    buf
}

// "Previous Token Balance," carries a comma and "New Token Balance" does not;
// downstream consumers match on these labels.
fn render_user(entry: &UserEntry<'_>, buf: &mut String, num: &mut itoa::Buffer) {
    let user = entry.user;

    buf.push_str("\t\t");
    buf.push_str(&user.last_name);
    buf.push_str(", ");
    buf.push_str(&user.first_name);
    buf.push_str(", ");
    buf.push_str(&user.email);
    buf.push('\n');

    buf.push_str("\t\t  Previous Token Balance, ");
    buf.push_str(num.format(entry.previous_balance));
    buf.push('\n');

    buf.push_str("\t\t  New Token Balance ");
    buf.push_str(num.format(entry.new_balance));
    buf.push('\n');
}
