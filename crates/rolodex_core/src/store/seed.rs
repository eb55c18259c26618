//! Fixed sample contacts used to seed a brand-new store.
//!
//! The first-ever `list()` call against an empty document persists these
//! records so a fresh install has something to show. Ids "1".."3" are part
//! of the seeding contract and must stay stable.

use crate::model::contact::{Contact, Note, NoteType};

/// Returns the three sample contacts seeded into an empty store.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "1".to_string(),
            name: "Alex Johnson".to_string(),
            linked_in_url: Some("https://linkedin.com/in/alexjohnson".to_string()),
            linked_in_username: Some("alexjohnson".to_string()),
            email: Some("alex@example.com".to_string()),
            phone: None,
            company: Some("TechCorp".to_string()),
            position: Some("Product Manager".to_string()),
            last_contact_date: Some("2023-05-15".to_string()),
            next_contact_date: Some("2023-08-15".to_string()),
            notes: vec![Note {
                id: "1-1".to_string(),
                content: "Met at TechConf 2023. Discussed potential collaboration on new product launch.".to_string(),
                date: "2023-05-15".to_string(),
                kind: NoteType::Meeting,
                location: Some("San Francisco".to_string()),
                topics: Some(vec![
                    "product launch".to_string(),
                    "collaboration".to_string(),
                ]),
            }],
            tags: vec!["tech".to_string(), "product".to_string()],
            profile_image: Some("https://randomuser.me/api/portraits/men/32.jpg".to_string()),
            created_at: "2023-01-10".to_string(),
            updated_at: "2023-05-15".to_string(),
        },
        Contact {
            id: "2".to_string(),
            name: "Samantha Lee".to_string(),
            linked_in_url: Some("https://linkedin.com/in/samanthaleee".to_string()),
            linked_in_username: Some("samanthaleee".to_string()),
            email: Some("sam@example.com".to_string()),
            phone: None,
            company: Some("DesignStudio".to_string()),
            position: Some("Creative Director".to_string()),
            last_contact_date: Some("2023-06-20".to_string()),
            next_contact_date: Some("2023-09-20".to_string()),
            notes: vec![Note {
                id: "2-1".to_string(),
                content: "Coffee meeting. She offered to introduce me to her network in the design industry.".to_string(),
                date: "2023-06-20".to_string(),
                kind: NoteType::Meeting,
                location: Some("Downtown Cafe".to_string()),
                topics: Some(vec![
                    "design industry".to_string(),
                    "networking".to_string(),
                ]),
            }],
            tags: vec!["design".to_string(), "creative".to_string()],
            profile_image: Some("https://randomuser.me/api/portraits/women/44.jpg".to_string()),
            created_at: "2023-02-15".to_string(),
            updated_at: "2023-06-20".to_string(),
        },
        Contact {
            id: "3".to_string(),
            name: "Michael Zhang".to_string(),
            linked_in_url: Some("https://linkedin.com/in/michaelzhang".to_string()),
            linked_in_username: Some("michaelzhang".to_string()),
            email: Some("michael@example.com".to_string()),
            phone: None,
            company: Some("Investors Ltd".to_string()),
            position: Some("Angel Investor".to_string()),
            last_contact_date: Some("2023-03-10".to_string()),
            next_contact_date: Some("2023-07-10".to_string()),
            notes: vec![Note {
                id: "3-1".to_string(),
                content: "Pitch meeting. Interested in our SaaS product, requested more financial projections.".to_string(),
                date: "2023-03-10".to_string(),
                kind: NoteType::Meeting,
                location: Some("Virtual Call".to_string()),
                topics: Some(vec![
                    "investment".to_string(),
                    "pitch".to_string(),
                    "financials".to_string(),
                ]),
            }],
            tags: vec!["investor".to_string(), "finance".to_string()],
            profile_image: Some("https://randomuser.me/api/portraits/men/67.jpg".to_string()),
            created_at: "2022-11-05".to_string(),
            updated_at: "2023-03-10".to_string(),
        },
    ]
}
