use crate::date::CalendarDate;
use crate::list::{EntityId, FieldValue, ListEntity, SortField};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: EntityId,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    pub customer: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub order_date: CalendarDate,
    pub status: OrderStatus,
    pub shipping_address: String,
}

impl Order {
    pub fn item_names(&self) -> String {
        let names: Vec<&str> = self.items.iter().map(|i| i.name.as_str()).collect();
        names.join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderField {
    Customer,
    Total,
    OrderDate,
    Status,
    ShippingAddress,
}

impl SortField for OrderField {
    const ALL: &'static [Self] = &[
        OrderField::Customer,
        OrderField::Total,
        OrderField::OrderDate,
        OrderField::Status,
        OrderField::ShippingAddress,
    ];

    fn key(&self) -> &'static str {
        match self {
            OrderField::Customer => "customer",
            OrderField::Total => "total",
            OrderField::OrderDate => "date",
            OrderField::Status => "status",
            OrderField::ShippingAddress => "address",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OrderField::Customer => "Customer",
            OrderField::Total => "Total",
            OrderField::OrderDate => "Order Date",
            OrderField::Status => "Status",
            OrderField::ShippingAddress => "Shipping Address",
        }
    }
}

impl ListEntity for Order {
    type Field = OrderField;
    const SEARCHABLE: &'static [OrderField] = &[OrderField::Customer, OrderField::ShippingAddress];

    fn id(&self) -> EntityId {
        self.id
    }

    fn field(&self, field: OrderField) -> FieldValue<'_> {
        match field {
            OrderField::Customer => FieldValue::Text(&self.customer),
            OrderField::Total => FieldValue::Number(self.total),
            OrderField::OrderDate => FieldValue::Date(self.order_date),
            OrderField::Status => FieldValue::Text(self.status.label()),
            OrderField::ShippingAddress => FieldValue::Text(&self.shipping_address),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub shipped: usize,
    pub revenue: f64,
}

impl OrderStats {
    pub fn of(orders: &[Order]) -> Self {
        let count = |s: OrderStatus| orders.iter().filter(|o| o.status == s).count();
        Self {
            total: orders.len(),
            pending: count(OrderStatus::Pending),
            shipped: count(OrderStatus::Shipped),
            revenue: orders.iter().map(|o| o.total).sum(),
        }
    }
}
