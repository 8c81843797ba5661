use crate::date::CalendarDate;
use crate::list::{EntityId, FieldValue, ListEntity, SortField};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackStatus {
    Pending,
    Reviewed,
    Resolved,
}

impl FeedbackStatus {
    pub const ALL: [FeedbackStatus; 3] = [
        FeedbackStatus::Pending,
        FeedbackStatus::Reviewed,
        FeedbackStatus::Resolved,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "Pending",
            FeedbackStatus::Reviewed => "Reviewed",
            FeedbackStatus::Resolved => "Resolved",
        }
    }
}

/// Product review left by a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: EntityId,
    pub customer: String,
    pub product: String,
    /// 1 to 5 stars
    pub rating: u8,
    pub comment: String,
    pub date: CalendarDate,
    /// Moderation state on the admin side
    pub status: FeedbackStatus,
    /// Whether the seller has replied
    pub responded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

impl Feedback {
    /// Records a seller reply. Blank replies are ignored and return `false`.
    pub fn record_reply(&mut self, reply: &str) -> bool {
        let reply = reply.trim();
        if reply.is_empty() {
            return false;
        }
        self.reply = Some(reply.to_string());
        self.responded = true;
        true
    }

    pub fn is_positive(&self) -> bool {
        self.rating >= 4
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeedbackField {
    Customer,
    Product,
    Rating,
    Comment,
    Date,
    Status,
}

impl SortField for FeedbackField {
    const ALL: &'static [Self] = &[
        FeedbackField::Customer,
        FeedbackField::Product,
        FeedbackField::Rating,
        FeedbackField::Comment,
        FeedbackField::Date,
        FeedbackField::Status,
    ];

    fn key(&self) -> &'static str {
        match self {
            FeedbackField::Customer => "customer",
            FeedbackField::Product => "product",
            FeedbackField::Rating => "rating",
            FeedbackField::Comment => "comment",
            FeedbackField::Date => "date",
            FeedbackField::Status => "status",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FeedbackField::Customer => "Customer",
            FeedbackField::Product => "Product",
            FeedbackField::Rating => "Rating",
            FeedbackField::Comment => "Comment",
            FeedbackField::Date => "Date",
            FeedbackField::Status => "Status",
        }
    }
}

impl ListEntity for Feedback {
    type Field = FeedbackField;
    const SEARCHABLE: &'static [FeedbackField] = &[
        FeedbackField::Customer,
        FeedbackField::Product,
        FeedbackField::Comment,
    ];

    fn id(&self) -> EntityId {
        self.id
    }

    fn field(&self, field: FeedbackField) -> FieldValue<'_> {
        match field {
            FeedbackField::Customer => FieldValue::Text(&self.customer),
            FeedbackField::Product => FieldValue::Text(&self.product),
            FeedbackField::Rating => FieldValue::Number(f64::from(self.rating)),
            FeedbackField::Comment => FieldValue::Text(&self.comment),
            FeedbackField::Date => FieldValue::Date(self.date),
            FeedbackField::Status => FieldValue::Text(self.status.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeedbackStats {
    pub total: usize,
    pub pending: usize,
    pub average_rating: f64,
    pub positive: usize,
    /// Share of feedback with a seller reply, in percent
    pub response_rate: f64,
}

impl FeedbackStats {
    pub fn of(feedback: &[Feedback]) -> Self {
        if feedback.is_empty() {
            return Self::default();
        }
        let total = feedback.len();
        let rating_sum: f64 = feedback.iter().map(|f| f64::from(f.rating)).sum();
        let responded = feedback.iter().filter(|f| f.responded).count();
        Self {
            total,
            pending: feedback
                .iter()
                .filter(|f| f.status == FeedbackStatus::Pending)
                .count(),
            average_rating: rating_sum / total as f64,
            positive: feedback.iter().filter(|f| f.is_positive()).count(),
            response_rate: responded as f64 / total as f64 * 100.0,
        }
    }
}
