use crate::date::CalendarDate;
use crate::list::{EntityId, FieldValue, ListEntity, SortField};
use serde::{Deserialize, Serialize};

/// Buyer of a seller's store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub total_orders: u32,
    pub total_spent: f64,
    pub last_order_date: CalendarDate,
    pub join_date: CalendarDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CustomerField {
    Name,
    Email,
    TotalOrders,
    TotalSpent,
    LastOrderDate,
    JoinDate,
}

impl SortField for CustomerField {
    const ALL: &'static [Self] = &[
        CustomerField::Name,
        CustomerField::Email,
        CustomerField::TotalOrders,
        CustomerField::TotalSpent,
        CustomerField::LastOrderDate,
        CustomerField::JoinDate,
    ];

    fn key(&self) -> &'static str {
        match self {
            CustomerField::Name => "name",
            CustomerField::Email => "email",
            CustomerField::TotalOrders => "orders",
            CustomerField::TotalSpent => "spent",
            CustomerField::LastOrderDate => "last-order",
            CustomerField::JoinDate => "joined",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CustomerField::Name => "Name",
            CustomerField::Email => "Email",
            CustomerField::TotalOrders => "Orders",
            CustomerField::TotalSpent => "Total Spent",
            CustomerField::LastOrderDate => "Last Order",
            CustomerField::JoinDate => "Joined",
        }
    }
}

impl ListEntity for Customer {
    type Field = CustomerField;
    const SEARCHABLE: &'static [CustomerField] = &[CustomerField::Name, CustomerField::Email];

    fn id(&self) -> EntityId {
        self.id
    }

    fn field(&self, field: CustomerField) -> FieldValue<'_> {
        match field {
            CustomerField::Name => FieldValue::Text(&self.name),
            CustomerField::Email => FieldValue::Text(&self.email),
            CustomerField::TotalOrders => FieldValue::Number(f64::from(self.total_orders)),
            CustomerField::TotalSpent => FieldValue::Number(self.total_spent),
            CustomerField::LastOrderDate => FieldValue::Date(self.last_order_date),
            CustomerField::JoinDate => FieldValue::Date(self.join_date),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CustomerStats {
    pub total: usize,
    pub orders: u32,
    pub revenue: f64,
    pub average_spend: f64,
}

impl CustomerStats {
    pub fn of(customers: &[Customer]) -> Self {
        let revenue: f64 = customers.iter().map(|c| c.total_spent).sum();
        Self {
            total: customers.len(),
            orders: customers.iter().map(|c| c.total_orders).sum(),
            revenue,
            average_spend: if customers.is_empty() {
                0.0
            } else {
                revenue / customers.len() as f64
            },
        }
    }
}
