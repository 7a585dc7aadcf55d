// src/domain/lead.rs

use crate::errors::ValidationError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Who the lead is: someone buying, someone selling, or an owner looking for management.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadKind {
    Buyer,
    Seller,
    Owner,
}

impl LeadKind {
    pub const ALL: [LeadKind; 3] = [LeadKind::Buyer, LeadKind::Seller, LeadKind::Owner];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadKind::Buyer => "buyer",
            LeadKind::Seller => "seller",
            LeadKind::Owner => "owner",
        }
    }
}

impl FromStr for LeadKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "buyer" => Ok(LeadKind::Buyer),
            "seller" => Ok(LeadKind::Seller),
            "owner" => Ok(LeadKind::Owner),
            other => Err(ValidationError::Invalid {
                field: "kind",
                reason: format!("unknown lead kind {other:?}"),
            }),
        }
    }
}

impl fmt::Display for LeadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CRM pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Closed,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Closed => "closed",
        }
    }
}

impl FromStr for LeadStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "qualified" => Ok(LeadStatus::Qualified),
            "closed" => Ok(LeadStatus::Closed),
            other => Err(ValidationError::Invalid {
                field: "status",
                reason: format!("unknown lead status {other:?}"),
            }),
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lead as submitted through the contact form, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub kind: LeadKind,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl NewLead {
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let field = |name: &str| form.get(name).map(|v| v.trim()).unwrap_or("");

        let kind = match field("kind") {
            "" => return Err(ValidationError::Missing { field: "kind" }),
            raw => raw.parse::<LeadKind>()?,
        };

        let name = field("name");
        if name.is_empty() {
            return Err(ValidationError::Missing { field: "name" });
        }

        let email = normalize_email(field("email"))?;

        let phone = match field("phone") {
            "" => None,
            raw => Some(raw.to_string()),
        };

        let message: String = field("message").chars().take(MAX_MESSAGE_CHARS).collect();

        Ok(Self {
            kind,
            name: name.to_string(),
            email,
            phone,
            message,
        })
    }
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() {
        return Err(ValidationError::Missing { field: "email" });
    }
    if !e.contains('@') || e.starts_with('@') || e.ends_with('@') || e.contains(' ') {
        return Err(ValidationError::Invalid {
            field: "email",
            reason: format!("{e:?} is not an email address"),
        });
    }
    Ok(e)
}

/// A stored lead.
#[derive(Debug, Clone)]
pub struct Lead {
    pub id: i64,
    pub kind: LeadKind,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: LeadStatus,
    pub created_at: i64,
}
