use crate::list::{EntityId, FieldValue, ListEntity, SortField};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductStatus {
    Active,
    Inactive,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Active,
        ProductStatus::Inactive,
        ProductStatus::OutOfStock,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Inactive => "Inactive",
            ProductStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// Catalogue entry, listed by admins across sellers and by a seller for its
/// own store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Price before discount; equal to `price` when not discounted
    pub original_price: f64,
    pub stock: u32,
    pub seller: String,
    pub status: ProductStatus,
    /// Average review score, 0 when unrated
    pub rating: f64,
}

impl Product {
    pub fn discount_percent(&self) -> Option<u32> {
        if self.original_price > self.price && self.original_price > 0.0 {
            Some((((self.original_price - self.price) / self.original_price) * 100.0).round() as u32)
        } else {
            None
        }
    }

    /// Applies a seller edit; stock changes move the product in and out of
    /// `OutOfStock`.
    pub fn apply_draft(&mut self, draft: &ProductDraft) {
        self.name = draft.name.trim().to_string();
        self.category = draft.category.trim().to_string();
        self.price = draft.price;
        self.original_price = draft.original_price.max(draft.price);
        self.stock = draft.stock;
        self.status = match (self.stock, self.status) {
            (0, _) => ProductStatus::OutOfStock,
            (_, ProductStatus::OutOfStock) => ProductStatus::Active,
            (_, status) => status,
        };
    }
}

/// Fields of the seller product form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub original_price: f64,
    pub stock: u32,
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            original_price: product.original_price,
            stock: product.stock,
        }
    }

    /// New product owned by `seller`, unrated.
    pub fn into_product(self, id: EntityId, seller: &str) -> Product {
        let mut product = Product {
            id,
            name: String::new(),
            category: String::new(),
            price: 0.0,
            original_price: 0.0,
            stock: 0,
            seller: seller.to_string(),
            status: ProductStatus::Active,
            rating: 0.0,
        };
        product.apply_draft(&self);
        product
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductField {
    Name,
    Category,
    Price,
    Stock,
    Seller,
    Status,
    Rating,
}

impl SortField for ProductField {
    const ALL: &'static [Self] = &[
        ProductField::Name,
        ProductField::Category,
        ProductField::Price,
        ProductField::Stock,
        ProductField::Seller,
        ProductField::Status,
        ProductField::Rating,
    ];

    fn key(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Category => "category",
            ProductField::Price => "price",
            ProductField::Stock => "stock",
            ProductField::Seller => "seller",
            ProductField::Status => "status",
            ProductField::Rating => "rating",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProductField::Name => "Name",
            ProductField::Category => "Category",
            ProductField::Price => "Price",
            ProductField::Stock => "Stock",
            ProductField::Seller => "Seller",
            ProductField::Status => "Status",
            ProductField::Rating => "Rating",
        }
    }
}

impl ListEntity for Product {
    type Field = ProductField;
    const SEARCHABLE: &'static [ProductField] =
        &[ProductField::Name, ProductField::Seller, ProductField::Category];

    fn id(&self) -> EntityId {
        self.id
    }

    fn field(&self, field: ProductField) -> FieldValue<'_> {
        match field {
            ProductField::Name => FieldValue::Text(&self.name),
            ProductField::Category => FieldValue::Text(&self.category),
            ProductField::Price => FieldValue::Number(self.price),
            ProductField::Stock => FieldValue::Number(f64::from(self.stock)),
            ProductField::Seller => FieldValue::Text(&self.seller),
            ProductField::Status => FieldValue::Text(self.status.label()),
            ProductField::Rating => FieldValue::Number(self.rating),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductStats {
    pub total: usize,
    pub active: usize,
    pub out_of_stock: usize,
    pub categories: usize,
}

impl ProductStats {
    pub fn of(products: &[Product]) -> Self {
        let mut categories: Vec<&str> = products.iter().map(|p| p.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        Self {
            total: products.len(),
            active: products.iter().filter(|p| p.status == ProductStatus::Active).count(),
            out_of_stock: products.iter().filter(|p| p.stock == 0).count(),
            categories: categories.len(),
        }
    }
}
