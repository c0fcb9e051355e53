//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! Rows live in ordered maps so listings come back in id order, matching the
//! PostgreSQL adapters.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    line_total, new_order_number, Category, CategoryChanges, CategoryId, NewCategory, NewOrder,
    NewOrderItem, NewProduct, NewUser, Order, OrderChanges, OrderFilter, OrderId, OrderItem,
    OrderItemChanges, OrderItemId, OrderStatus, Page, Product, ProductChanges, ProductFilter,
    ProductId, User, UserChanges, UserFilter, UserId,
};
use crate::domain::ports::{
    CategoryRepository, OrderRepository, ProductRepository, UserRepository,
};
use crate::error::DomainError;

/// Apply an offset window to already ordered rows
fn paginate<T>(rows: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    rows.skip(page.skip as usize)
        .take(page.limit as usize)
        .collect()
}

fn next_id<V>(rows: &BTreeMap<i32, V>) -> i32 {
    rows.keys().next_back().map_or(1, |id| id + 1)
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i32, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.users.write().unwrap().insert(user.id.0, user);
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.get(&id.0).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn list(&self, filter: &UserFilter, page: Page) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().unwrap();
        let rows = users
            .values()
            .filter(|u| filter.role.map_or(true, |role| u.role == role))
            .filter(|u| !filter.active_only || u.is_active)
            .cloned();
        Ok(paginate(rows, page))
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().unwrap();
        if users
            .values()
            .any(|u| u.email == new_user.email || u.username == new_user.username)
        {
            return Err(DomainError::Database(
                "duplicate key value violates unique constraint".to_string(),
            ));
        }

        let user = User {
            id: UserId(next_id(&users)),
            email: new_user.email.clone(),
            username: new_user.username.clone(),
            full_name: new_user.full_name.clone(),
            hashed_password: new_user.hashed_password.clone(),
            phone: new_user.phone.clone(),
            address: new_user.address.clone(),
            city: new_user.city.clone(),
            country: new_user.country.clone(),
            role: new_user.role,
            is_active: true,
            is_verified: false,
            created_at: Utc::now(),
            updated_at: None,
        };
        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: &UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().unwrap();
        let Some(user) = users.get_mut(&id.0) else {
            return Ok(None);
        };

        if let Some(email) = &changes.email {
            user.email = email.clone();
        }
        if let Some(username) = &changes.username {
            user.username = username.clone();
        }
        if let Some(full_name) = &changes.full_name {
            user.full_name = full_name.clone();
        }
        if let Some(phone) = &changes.phone {
            user.phone = phone.clone();
        }
        if let Some(address) = &changes.address {
            user.address = address.clone();
        }
        if let Some(city) = &changes.city {
            user.city = city.clone();
        }
        if let Some(country) = &changes.country {
            user.country = country.clone();
        }
        if let Some(is_active) = changes.is_active {
            user.is_active = is_active;
        }
        user.updated_at = Some(Utc::now());

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().unwrap();
        Ok(users.remove(&id.0).is_some())
    }
}

// ============================================================================
// In-Memory Category Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<i32, Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, category: Category) -> Self {
        self.categories
            .write()
            .unwrap()
            .insert(category.id.0, category);
        self
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        let categories = self.categories.read().unwrap();
        Ok(categories.get(&id.0).cloned())
    }

    async fn list(
        &self,
        parent_id: Option<CategoryId>,
        page: Page,
    ) -> Result<Vec<Category>, DomainError> {
        let categories = self.categories.read().unwrap();
        let rows = categories
            .values()
            .filter(|c| parent_id.map_or(true, |p| c.parent_id == Some(p)))
            .cloned();
        Ok(paginate(rows, page))
    }

    async fn create(&self, new_category: &NewCategory) -> Result<Category, DomainError> {
        let mut categories = self.categories.write().unwrap();
        if categories.values().any(|c| c.slug == new_category.slug) {
            return Err(DomainError::Database(
                "duplicate key value violates unique constraint".to_string(),
            ));
        }

        let category = Category {
            id: CategoryId(next_id(&categories)),
            name: new_category.name.clone(),
            slug: new_category.slug.clone(),
            description: new_category.description.clone(),
            parent_id: new_category.parent_id,
            created_at: Utc::now(),
            updated_at: None,
        };
        categories.insert(category.id.0, category.clone());
        Ok(category)
    }

    async fn update(
        &self,
        id: &CategoryId,
        changes: &CategoryChanges,
    ) -> Result<Option<Category>, DomainError> {
        let mut categories = self.categories.write().unwrap();
        let Some(category) = categories.get_mut(&id.0) else {
            return Ok(None);
        };

        if let Some(name) = &changes.name {
            category.name = name.clone();
        }
        if let Some(slug) = &changes.slug {
            category.slug = slug.clone();
        }
        if let Some(description) = &changes.description {
            category.description = description.clone();
        }
        if let Some(parent_id) = changes.parent_id {
            category.parent_id = parent_id;
        }
        category.updated_at = Some(Utc::now());

        Ok(Some(category.clone()))
    }

    async fn delete(&self, id: &CategoryId) -> Result<bool, DomainError> {
        let mut categories = self.categories.write().unwrap();
        Ok(categories.remove(&id.0).is_some())
    }
}

// ============================================================================
// In-Memory Product Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i32, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(self, product: Product) -> Self {
        self.products
            .write()
            .unwrap()
            .insert(product.id.0, product);
        self
    }
}

fn matches_text(product: &Product, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().unwrap();
        Ok(products.get(&id.0).cloned())
    }

    async fn list(&self, filter: &ProductFilter, page: Page) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().unwrap();
        let rows = products
            .values()
            .filter(|p| filter.category_id.map_or(true, |c| p.category_id == c))
            .filter(|p| !filter.active_only || p.is_active)
            .cloned();
        Ok(paginate(rows, page))
    }

    async fn search(&self, text: &str, page: Page) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().unwrap();
        let rows = products
            .values()
            .filter(|p| matches_text(p, text))
            .cloned();
        Ok(paginate(rows, page))
    }

    async fn create(&self, new_product: &NewProduct) -> Result<Product, DomainError> {
        let mut products = self.products.write().unwrap();
        if products.values().any(|p| p.sku == new_product.sku) {
            return Err(DomainError::Database(
                "duplicate key value violates unique constraint".to_string(),
            ));
        }

        let product = Product {
            id: ProductId(next_id(&products)),
            name: new_product.name.clone(),
            description: new_product.description.clone(),
            price: new_product.price,
            stock_quantity: new_product.stock_quantity,
            sku: new_product.sku.clone(),
            is_active: new_product.is_active,
            category_id: new_product.category_id,
            created_at: Utc::now(),
            updated_at: None,
        };
        products.insert(product.id.0, product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: &ProductId,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, DomainError> {
        let mut products = self.products.write().unwrap();
        let Some(product) = products.get_mut(&id.0) else {
            return Ok(None);
        };

        if let Some(name) = &changes.name {
            product.name = name.clone();
        }
        if let Some(description) = &changes.description {
            product.description = description.clone();
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(stock_quantity) = changes.stock_quantity {
            product.stock_quantity = stock_quantity;
        }
        if let Some(sku) = &changes.sku {
            product.sku = sku.clone();
        }
        if let Some(category_id) = changes.category_id {
            product.category_id = category_id;
        }
        if let Some(is_active) = changes.is_active {
            product.is_active = is_active;
        }
        product.updated_at = Some(Utc::now());

        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, DomainError> {
        let mut products = self.products.write().unwrap();
        Ok(products.remove(&id.0).is_some())
    }
}

// ============================================================================
// In-Memory Order Repository
// ============================================================================

/// Orders are stored without their items; items live in their own table
/// and are nested on read, as in PostgreSQL.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<BTreeMap<i32, Order>>>,
    items: Arc<RwLock<BTreeMap<i32, OrderItem>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an order and its items
    pub fn with_order(self, mut order: Order) -> Self {
        {
            let mut items = self.items.write().unwrap();
            for item in order.items.drain(..) {
                items.insert(item.id.0, item);
            }
            self.orders.write().unwrap().insert(order.id.0, order);
        }
        self
    }

    fn nest(&self, mut order: Order) -> Order {
        let items = self.items.read().unwrap();
        order.items = items
            .values()
            .filter(|i| i.order_id == order.id)
            .cloned()
            .collect();
        order
    }

    fn insert_item(&self, order_id: OrderId, item: &NewOrderItem) -> OrderItem {
        let mut items = self.items.write().unwrap();
        let item = OrderItem {
            id: OrderItemId(next_id(&items)),
            order_id,
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_price: item.total_price,
        };
        items.insert(item.id.0, item.clone());
        item
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let order = self.orders.read().unwrap().get(&id.0).cloned();
        Ok(order.map(|o| self.nest(o)))
    }

    async fn list(&self, filter: &OrderFilter, page: Page) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.read().unwrap();
        let rows = orders
            .values()
            .filter(|o| filter.status.map_or(true, |s| o.status == s))
            .filter(|o| filter.user_id.map_or(true, |u| o.user_id == u))
            .cloned();
        let page = paginate(rows, page);
        drop(orders);

        Ok(page.into_iter().map(|o| self.nest(o)).collect())
    }

    async fn create(&self, new_order: &NewOrder) -> Result<Order, DomainError> {
        let order = {
            let mut orders = self.orders.write().unwrap();
            let order = Order {
                id: OrderId(next_id(&orders)),
                order_number: new_order_number(Utc::now()),
                user_id: new_order.user_id,
                status: OrderStatus::Pending,
                payment_method: new_order.payment_method,
                subtotal: new_order.totals.subtotal,
                tax_amount: new_order.totals.tax_amount,
                shipping_cost: new_order.totals.shipping_cost,
                total_amount: new_order.totals.total_amount,
                shipping_address: new_order.shipping_address.clone(),
                billing_address: new_order.billing_address.clone(),
                notes: new_order.notes.clone(),
                created_at: Utc::now(),
                updated_at: None,
                items: Vec::new(),
            };
            orders.insert(order.id.0, order.clone());
            order
        };

        for item in &new_order.items {
            self.insert_item(order.id, item);
        }

        Ok(self.nest(order))
    }

    async fn update(
        &self,
        id: &OrderId,
        changes: &OrderChanges,
    ) -> Result<Option<Order>, DomainError> {
        let updated = {
            let mut orders = self.orders.write().unwrap();
            let Some(order) = orders.get_mut(&id.0) else {
                return Ok(None);
            };

            if let Some(status) = changes.status {
                order.status = status;
            }
            if let Some(payment_method) = changes.payment_method {
                order.payment_method = payment_method;
            }
            if let Some(notes) = &changes.notes {
                order.notes = notes.clone();
            }
            order.updated_at = Some(Utc::now());
            order.clone()
        };

        Ok(Some(self.nest(updated)))
    }

    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError> {
        let changes = OrderChanges {
            status: Some(status),
            ..Default::default()
        };
        self.update(id, &changes).await
    }

    async fn add_item(
        &self,
        order_id: &OrderId,
        item: &NewOrderItem,
    ) -> Result<Option<OrderItem>, DomainError> {
        if !self.orders.read().unwrap().contains_key(&order_id.0) {
            return Ok(None);
        }
        Ok(Some(self.insert_item(*order_id, item)))
    }

    async fn update_item(
        &self,
        id: &OrderItemId,
        changes: &OrderItemChanges,
    ) -> Result<Option<OrderItem>, DomainError> {
        let mut items = self.items.write().unwrap();
        let Some(item) = items.get_mut(&id.0) else {
            return Ok(None);
        };

        if let Some(quantity) = changes.quantity {
            item.quantity = quantity;
        }
        if let Some(unit_price) = changes.unit_price {
            item.unit_price = unit_price;
        }
        item.total_price = line_total(item.quantity, item.unit_price)?;

        Ok(Some(item.clone()))
    }

    async fn delete_item(&self, id: &OrderItemId) -> Result<bool, DomainError> {
        let mut items = self.items.write().unwrap();
        Ok(items.remove(&id.0).is_some())
    }
}
