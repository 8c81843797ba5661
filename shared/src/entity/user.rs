use crate::date::CalendarDate;
use crate::list::{EntityId, FieldValue, ListEntity, SortField};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub const ALL: [UserStatus; 3] = [UserStatus::Active, UserStatus::Inactive, UserStatus::Pending];

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Pending => "Pending",
        }
    }
}

/// Marketplace account as listed on the admin users page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    /// Account kind shown in the table (`Customer`, `Seller`)
    pub role: String,
    pub status: UserStatus,
    pub join_date: CalendarDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    Name,
    Email,
    Role,
    Status,
    JoinDate,
}

impl SortField for UserField {
    const ALL: &'static [Self] = &[
        UserField::Name,
        UserField::Email,
        UserField::Role,
        UserField::Status,
        UserField::JoinDate,
    ];

    fn key(&self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Role => "role",
            UserField::Status => "status",
            UserField::JoinDate => "joined",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UserField::Name => "Name",
            UserField::Email => "Email",
            UserField::Role => "Role",
            UserField::Status => "Status",
            UserField::JoinDate => "Join Date",
        }
    }
}

impl ListEntity for User {
    type Field = UserField;
    const SEARCHABLE: &'static [UserField] = &[UserField::Name, UserField::Email];

    fn id(&self) -> EntityId {
        self.id
    }

    fn field(&self, field: UserField) -> FieldValue<'_> {
        match field {
            UserField::Name => FieldValue::Text(&self.name),
            UserField::Email => FieldValue::Text(&self.email),
            UserField::Role => FieldValue::Text(&self.role),
            UserField::Status => FieldValue::Text(self.status.label()),
            UserField::JoinDate => FieldValue::Date(self.join_date),
        }
    }
}

/// Stat cards of the users page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
}

impl UserStats {
    pub fn of(users: &[User]) -> Self {
        let count = |s: UserStatus| users.iter().filter(|u| u.status == s).count();
        Self {
            total: users.len(),
            active: count(UserStatus::Active),
            pending: count(UserStatus::Pending),
        }
    }
}
