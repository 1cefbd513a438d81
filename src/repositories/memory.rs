//! In-memory repository implementations backed by a Mutex-guarded Vec.
//!
//! Used by service and handler tests to exercise business logic without a
//! database. Ids are assigned sequentially from the current row count.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::{
    Category, Credential, Favourite, NewCredential, NewFavourite, NewOrder, NewPayment,
    NewProduct, NewUser, Order, Payment, Product, UpdateCredential, UpdateFavourite, UpdateOrder,
    UpdatePayment, UpdateProduct, UpdateUser, User,
};
use crate::repositories::{
    FavouriteRepository, OrderRepository, PaymentRepository, ProductRecord, ProductRepository,
    UserRecord, UserRepository,
};

fn test_timestamp() -> jiff_diesel::DateTime {
    jiff::civil::date(2026, 1, 15).at(9, 30, 0, 0).into()
}

#[derive(Default)]
pub struct InMemoryUserRepo {
    rows: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserRepo {
    pub fn with_rows(rows: Vec<UserRecord>) -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(rows),
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_all(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<UserRecord>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|(user, _)| user.user_id == id)
            .cloned())
    }

    async fn find_by_credential_username(&self, username: &str) -> AppResult<Option<UserRecord>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|(_, credential)| {
                credential.as_ref().is_some_and(|c| c.username == username)
            })
            .cloned())
    }

    async fn create(
        &self,
        new_user: NewUser,
        new_credential: Option<NewCredential>,
    ) -> AppResult<UserRecord> {
        let mut rows = self.rows.lock().unwrap();
        let user_id = rows.len() as i32 + 1;
        let user = User {
            user_id,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            phone: new_user.phone,
        };
        let credential = new_credential.map(|c| Credential {
            credential_id: user_id,
            user_id,
            username: c.username,
            password: c.password,
            role_based_authority: c.role_based_authority,
            is_enabled: c.is_enabled,
            is_account_non_expired: c.is_account_non_expired,
            is_account_non_locked: c.is_account_non_locked,
            is_credentials_non_expired: c.is_credentials_non_expired,
        });
        let record = (user, credential);
        rows.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: i32,
        user_changes: UpdateUser,
        credential_changes: Option<UpdateCredential>,
    ) -> AppResult<UserRecord> {
        let mut rows = self.rows.lock().unwrap();
        let record = rows
            .iter_mut()
            .find(|(user, _)| user.user_id == id)
            .ok_or_else(|| AppError::not_found("User", id))?;
        if let Some(first_name) = user_changes.first_name {
            record.0.first_name = first_name;
        }
        if let Some(last_name) = user_changes.last_name {
            record.0.last_name = last_name;
        }
        if let Some(email) = user_changes.email {
            record.0.email = email;
        }
        if let Some(phone) = user_changes.phone {
            record.0.phone = Some(phone);
        }
        if let (Some(changes), Some(credential)) = (credential_changes, record.1.as_mut()) {
            if let Some(username) = changes.username {
                credential.username = username;
            }
            if let Some(password) = changes.password {
                credential.password = password;
            }
            if let Some(role) = changes.role_based_authority {
                credential.role_based_authority = role;
            }
            if let Some(is_enabled) = changes.is_enabled {
                credential.is_enabled = is_enabled;
            }
            if let Some(flag) = changes.is_account_non_expired {
                credential.is_account_non_expired = flag;
            }
            if let Some(flag) = changes.is_account_non_locked {
                credential.is_account_non_locked = flag;
            }
            if let Some(flag) = changes.is_credentials_non_expired {
                credential.is_credentials_non_expired = flag;
            }
        }
        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(user, _)| user.user_id != id);
        Ok(before - rows.len())
    }
}

#[derive(Default)]
pub struct InMemoryProductRepo {
    rows: Mutex<Vec<ProductRecord>>,
}

impl InMemoryProductRepo {
    pub fn with_rows(rows: Vec<ProductRecord>) -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(rows),
        })
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn find_all(&self) -> AppResult<Vec<ProductRecord>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<ProductRecord>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|(product, _)| product.product_id == id)
            .cloned())
    }

    async fn create(&self, new_product: NewProduct) -> AppResult<ProductRecord> {
        let mut rows = self.rows.lock().unwrap();
        let product = Product {
            product_id: rows.len() as i32 + 1,
            product_name: new_product.product_name,
            price: new_product.price,
            quantity: new_product.quantity,
            category_id: new_product.category_id,
        };
        let category = new_product_category(product.category_id);
        let record = (product, category);
        rows.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: i32, changes: UpdateProduct) -> AppResult<ProductRecord> {
        let mut rows = self.rows.lock().unwrap();
        let record = rows
            .iter_mut()
            .find(|(product, _)| product.product_id == id)
            .ok_or_else(|| AppError::not_found("Product", id))?;
        if let Some(name) = changes.product_name {
            record.0.product_name = name;
        }
        if let Some(price) = changes.price {
            record.0.price = price;
        }
        if let Some(quantity) = changes.quantity {
            record.0.quantity = quantity;
        }
        if let Some(category_id) = changes.category_id {
            record.0.category_id = category_id;
            record.1 = new_product_category(category_id);
        }
        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(product, _)| product.product_id != id);
        Ok(before - rows.len())
    }
}

fn new_product_category(category_id: Option<i32>) -> Option<Category> {
    category_id.map(|id| Category {
        category_id: id,
        category_name: format!("Category {}", id),
    })
}

#[derive(Default)]
pub struct InMemoryOrderRepo {
    rows: Mutex<Vec<Order>>,
}

impl InMemoryOrderRepo {
    pub fn with_rows(rows: Vec<Order>) -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(rows),
        })
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepo {
    async fn find_all(&self) -> AppResult<Vec<Order>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|order| order.order_id == id)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<Order>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, new_order: NewOrder) -> AppResult<Order> {
        let mut rows = self.rows.lock().unwrap();
        let order = Order {
            order_id: rows.len() as i32 + 1,
            user_id: new_order.user_id,
            total_amount: new_order.total_amount,
            status: new_order.status,
            order_date: test_timestamp(),
        };
        rows.push(order.clone());
        Ok(order)
    }

    async fn update(&self, id: i32, changes: UpdateOrder) -> AppResult<Order> {
        let mut rows = self.rows.lock().unwrap();
        let order = rows
            .iter_mut()
            .find(|order| order.order_id == id)
            .ok_or_else(|| AppError::not_found("Order", id))?;
        if let Some(user_id) = changes.user_id {
            order.user_id = user_id;
        }
        if let Some(total_amount) = changes.total_amount {
            order.total_amount = total_amount;
        }
        if let Some(status) = changes.status {
            order.status = status;
        }
        Ok(order.clone())
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|order| order.order_id != id);
        Ok(before - rows.len())
    }
}

#[derive(Default)]
pub struct InMemoryPaymentRepo {
    rows: Mutex<Vec<Payment>>,
}

impl InMemoryPaymentRepo {
    pub fn with_rows(rows: Vec<Payment>) -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(rows),
        })
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepo {
    async fn find_all(&self) -> AppResult<Vec<Payment>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Payment>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|payment| payment.payment_id == id)
            .cloned())
    }

    async fn find_by_order_id(&self, order_id: i32) -> AppResult<Vec<Payment>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|payment| payment.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn create(&self, new_payment: NewPayment) -> AppResult<Payment> {
        let mut rows = self.rows.lock().unwrap();
        let payment = Payment {
            payment_id: rows.len() as i32 + 1,
            order_id: new_payment.order_id,
            is_payed: new_payment.is_payed,
            payment_status: new_payment.payment_status,
        };
        rows.push(payment.clone());
        Ok(payment)
    }

    async fn update(&self, id: i32, changes: UpdatePayment) -> AppResult<Payment> {
        let mut rows = self.rows.lock().unwrap();
        let payment = rows
            .iter_mut()
            .find(|payment| payment.payment_id == id)
            .ok_or_else(|| AppError::not_found("Payment", id))?;
        if let Some(is_payed) = changes.is_payed {
            payment.is_payed = is_payed;
        }
        if let Some(status) = changes.payment_status {
            payment.payment_status = status;
        }
        Ok(payment.clone())
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|payment| payment.payment_id != id);
        Ok(before - rows.len())
    }
}

#[derive(Default)]
pub struct InMemoryFavouriteRepo {
    rows: Mutex<Vec<Favourite>>,
}

impl InMemoryFavouriteRepo {
    pub fn with_rows(rows: Vec<Favourite>) -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(rows),
        })
    }
}

#[async_trait]
impl FavouriteRepository for InMemoryFavouriteRepo {
    async fn find_all(&self) -> AppResult<Vec<Favourite>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Favourite>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|favourite| favourite.favourite_id == id)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<Favourite>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|favourite| favourite.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, new_favourite: NewFavourite) -> AppResult<Favourite> {
        let mut rows = self.rows.lock().unwrap();
        let favourite = Favourite {
            favourite_id: rows.len() as i32 + 1,
            user_id: new_favourite.user_id,
            product_id: new_favourite.product_id,
            like_date: test_timestamp(),
        };
        rows.push(favourite.clone());
        Ok(favourite)
    }

    async fn update(&self, id: i32, changes: UpdateFavourite) -> AppResult<Favourite> {
        let mut rows = self.rows.lock().unwrap();
        let favourite = rows
            .iter_mut()
            .find(|favourite| favourite.favourite_id == id)
            .ok_or_else(|| AppError::not_found("Favourite", id))?;
        if let Some(user_id) = changes.user_id {
            favourite.user_id = user_id;
        }
        if let Some(product_id) = changes.product_id {
            favourite.product_id = product_id;
        }
        Ok(favourite.clone())
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|favourite| favourite.favourite_id != id);
        Ok(before - rows.len())
    }
}
