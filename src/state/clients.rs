//! Client directory model and search filtering.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

/// Billing state shown as a badge next to each client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingStatus {
    Paid,
    Pending,
    Overdue,
}

impl BillingStatus {
    pub fn label(self) -> &'static str {
        match self {
            BillingStatus::Paid => "Paid",
            BillingStatus::Pending => "Pending",
            BillingStatus::Overdue => "Overdue",
        }
    }

    /// CSS modifier for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            BillingStatus::Paid => "badge--paid",
            BillingStatus::Pending => "badge--pending",
            BillingStatus::Overdue => "badge--overdue",
        }
    }
}

/// Preferred outreach channel for client updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactChannel {
    Email,
    WhatsApp,
    Sms,
}

impl ContactChannel {
    pub const ALL: [ContactChannel; 3] =
        [ContactChannel::Email, ContactChannel::WhatsApp, ContactChannel::Sms];

    pub fn label(self) -> &'static str {
        match self {
            ContactChannel::Email => "Email",
            ContactChannel::WhatsApp => "WhatsApp",
            ContactChannel::Sms => "SMS",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Email" => Some(ContactChannel::Email),
            "WhatsApp" => Some(ContactChannel::WhatsApp),
            "SMS" => Some(ContactChannel::Sms),
            _ => None,
        }
    }
}

/// A client relationship record.
#[derive(Clone, Debug, PartialEq)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cases: Vec<String>,
    pub documents: u32,
    pub last_contact: String,
    pub billing_status: BillingStatus,
    pub total_billed_cents: i64,
    pub preferred_contact: ContactChannel,
    pub avatar: String,
    pub company: String,
}

/// Seed client directory.
pub fn seed_clients() -> Vec<Client> {
    vec![
        Client {
            id: 1,
            name: "Sarah Johnson".to_owned(),
            email: "sarah@example.com".to_owned(),
            phone: "+1 (555) 123-4567".to_owned(),
            cases: vec!["Divorce Case #2023-45".to_owned(), "Child Custody #2023-78".to_owned()],
            documents: 5,
            last_contact: "2023-10-15".to_owned(),
            billing_status: BillingStatus::Paid,
            total_billed_cents: 450_000,
            preferred_contact: ContactChannel::Email,
            avatar: "SJ".to_owned(),
            company: "Johnson & Associates".to_owned(),
        },
        Client {
            id: 2,
            name: "Michael Chen".to_owned(),
            email: "michael@example.com".to_owned(),
            phone: "+1 (555) 987-6543".to_owned(),
            cases: vec!["Business Contract #2023-112".to_owned()],
            documents: 3,
            last_contact: "2023-10-18".to_owned(),
            billing_status: BillingStatus::Pending,
            total_billed_cents: 250_000,
            preferred_contact: ContactChannel::WhatsApp,
            avatar: "MC".to_owned(),
            company: "Tech Innovations Inc.".to_owned(),
        },
        Client {
            id: 3,
            name: "Emma Rodriguez".to_owned(),
            email: "emma@example.com".to_owned(),
            phone: "+1 (555) 456-7890".to_owned(),
            cases: vec!["Real Estate #2023-56".to_owned(), "Will & Testament #2023-89".to_owned()],
            documents: 7,
            last_contact: "2023-10-10".to_owned(),
            billing_status: BillingStatus::Overdue,
            total_billed_cents: 620_000,
            preferred_contact: ContactChannel::Sms,
            avatar: "ER".to_owned(),
            company: "Rodriguez Family Office".to_owned(),
        },
        Client {
            id: 4,
            name: "David Wilson".to_owned(),
            email: "david@example.com".to_owned(),
            phone: "+1 (555) 234-5678".to_owned(),
            cases: vec!["Intellectual Property #2023-134".to_owned()],
            documents: 4,
            last_contact: "2023-10-22".to_owned(),
            billing_status: BillingStatus::Paid,
            total_billed_cents: 380_000,
            preferred_contact: ContactChannel::Email,
            avatar: "DW".to_owned(),
            company: "Wilson Studios".to_owned(),
        },
    ]
}

/// Case-insensitive substring match over name, email, and company.
pub fn matches_search(client: &Client, raw_query: &str) -> bool {
    let query = raw_query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    client.name.to_lowercase().contains(&query)
        || client.email.to_lowercase().contains(&query)
        || client.company.to_lowercase().contains(&query)
}

pub fn filter_clients(clients: &[Client], query: &str) -> Vec<Client> {
    clients
        .iter()
        .filter(|c| matches_search(c, query))
        .cloned()
        .collect()
}
