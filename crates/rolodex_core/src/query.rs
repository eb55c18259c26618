//! Search and ordering helpers over contact collections.
//!
//! # Responsibility
//! - Case-insensitive substring search across the fields shown in lists.
//! - Alphabetical and date orderings behind the list sort options.
//!
//! # Invariants
//! - Helpers are non-mutating; they return new sequences.
//! - Sorts are stable.

use crate::model::contact::Contact;
use crate::schedule::dates::{sort_by_date, DateField};

/// Sortable keys of the contact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Alphabetical by name, case-insensitive.
    Name,
    /// Alphabetical by company, case-insensitive; missing company sorts as
    /// the empty string.
    Company,
    /// By one of the record's date fields.
    Date(DateField),
}

/// Filters contacts whose name, company, position or any tag contains the
/// search term, case-insensitively.
///
/// An empty or whitespace-only term matches everything.
pub fn search_contacts(contacts: &[Contact], term: &str) -> Vec<Contact> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return contacts.to_vec();
    }

    contacts
        .iter()
        .filter(|contact| {
            contact.name.to_lowercase().contains(&term)
                || field_contains(contact.company.as_deref(), &term)
                || field_contains(contact.position.as_deref(), &term)
                || contact
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

/// Returns a new sequence of contacts ordered by `key`.
pub fn sort_contacts(contacts: &[Contact], key: SortKey, ascending: bool) -> Vec<Contact> {
    match key {
        SortKey::Name => sort_by_text(contacts, ascending, |c| c.name.to_lowercase()),
        SortKey::Company => sort_by_text(contacts, ascending, |c| {
            c.company.as_deref().unwrap_or("").to_lowercase()
        }),
        SortKey::Date(field) => sort_by_date(contacts, field, ascending),
    }
}

fn field_contains(value: Option<&str>, term: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(term))
}

fn sort_by_text(
    contacts: &[Contact],
    ascending: bool,
    key: impl Fn(&Contact) -> String,
) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by(|a, b| {
        let (key_a, key_b) = (key(a), key(b));
        if ascending {
            key_a.cmp(&key_b)
        } else {
            key_b.cmp(&key_a)
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::{search_contacts, sort_contacts, SortKey};
    use crate::model::contact::Contact;
    use crate::schedule::dates::DateField;

    fn contact(name: &str, company: Option<&str>, tags: &[&str]) -> Contact {
        Contact {
            id: name.to_lowercase(),
            name: name.to_string(),
            linked_in_url: None,
            linked_in_username: None,
            email: None,
            phone: None,
            company: company.map(str::to_string),
            position: None,
            last_contact_date: None,
            next_contact_date: None,
            notes: Vec::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            profile_image: None,
            created_at: "2023-01-01".to_string(),
            updated_at: "2023-01-01".to_string(),
        }
    }

    #[test]
    fn search_matches_name_company_position_and_tags() {
        let contacts = vec![
            contact("Alex Johnson", Some("TechCorp"), &["product"]),
            contact("Samantha Lee", Some("DesignStudio"), &["design"]),
            contact("Michael Zhang", None, &["investor", "finance"]),
        ];

        let by_name = search_contacts(&contacts, "alex");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Alex Johnson");

        let by_company = search_contacts(&contacts, "STUDIO");
        assert_eq!(by_company.len(), 1);
        assert_eq!(by_company[0].name, "Samantha Lee");

        let by_tag = search_contacts(&contacts, "finance");
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].name, "Michael Zhang");

        assert_eq!(search_contacts(&contacts, "   ").len(), 3);
        assert!(search_contacts(&contacts, "nothing").is_empty());
    }

    #[test]
    fn sort_by_name_and_company_is_case_insensitive() {
        let contacts = vec![
            contact("bob", Some("zeta"), &[]),
            contact("Alice", None, &[]),
            contact("carol", Some("Acme"), &[]),
        ];

        let by_name = sort_contacts(&contacts, SortKey::Name, true);
        let names: Vec<&str> = by_name.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "bob", "carol"]);

        let by_company = sort_contacts(&contacts, SortKey::Company, false);
        let names: Vec<&str> = by_company.iter().map(|c| c.name.as_str()).collect();
        // Missing company sorts as empty string, so it lands last descending.
        assert_eq!(names, vec!["bob", "carol", "Alice"]);
    }

    #[test]
    fn sort_by_date_key_delegates_to_schedule_ordering() {
        let mut older = contact("older", None, &[]);
        older.last_contact_date = Some("2023-01-01".to_string());
        let mut newer = contact("newer", None, &[]);
        newer.last_contact_date = Some("2023-06-01".to_string());

        let sorted = sort_contacts(
            &[older, newer],
            SortKey::Date(DateField::LastContactDate),
            false,
        );
        assert_eq!(sorted[0].name, "newer");
    }
}
