//! In-memory stand-ins for the MongoDB repositories and the Stripe gateway,
//! plus helpers that drive the real router with `oneshot`.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::{to_bytes, Body}, http::{Request, StatusCode}, Router};
use bson::{oid::ObjectId, Bson, Document};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use diagpulse_backend::app::app::{create_router, AppServices};
use diagpulse_backend::config::JwtConfig;
use diagpulse_backend::middlewares::auth_middleware::AuthState;
use diagpulse_backend::model::appointment::Appointment;
use diagpulse_backend::model::banner::Banner;
use diagpulse_backend::model::catalog::CatalogItem;
use diagpulse_backend::model::diagnostic_test::DiagnosticTest;
use diagpulse_backend::model::payment::PaymentRecord;
use diagpulse_backend::model::user::{User, ADMIN_ROLE};
use diagpulse_backend::repository::appointment_repo::AppointmentRepository;
use diagpulse_backend::repository::banner_repo::BannerRepository;
use diagpulse_backend::repository::catalog_repo::CatalogRepository;
use diagpulse_backend::repository::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use diagpulse_backend::repository::payment_repo::PaymentRepository;
use diagpulse_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use diagpulse_backend::repository::test_repo::TestRepository;
use diagpulse_backend::repository::user_repo::UserRepository;
use diagpulse_backend::service::appointment_service::AppointmentServiceImpl;
use diagpulse_backend::service::banner_service::BannerServiceImpl;
use diagpulse_backend::service::catalog_service::CatalogServiceImpl;
use diagpulse_backend::service::payment_service::PaymentServiceImpl;
use diagpulse_backend::service::test_service::TestServiceImpl;
use diagpulse_backend::service::user_service::UserServiceImpl;
use diagpulse_backend::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};
use diagpulse_backend::util::stripe::{PaymentError, PaymentGateway, PaymentIntent};

pub const ADMIN_EMAIL: &str = "admin@diagpulse.test";
pub const PATIENT_EMAIL: &str = "patient@diagpulse.test";

/// Documents kept in insertion order, addressed by `_id`.
pub struct MemStore<T> {
    pub items: Mutex<Vec<T>>,
}

impl<T> Default for MemStore<T> {
    fn default() -> Self {
        MemStore { items: Mutex::new(Vec::new()) }
    }
}

fn id_of<T: Serialize>(item: &T) -> Option<ObjectId> {
    bson::to_document(item).ok()?.get_object_id("_id").ok()
}

/// Applies a `$set` the way the server would.
fn apply_set<T: Serialize + DeserializeOwned>(item: &T, fields: &Document) -> RepositoryResult<T> {
    let mut doc = bson::to_document(item).map_err(RepositoryError::from)?;
    for (k, v) in fields {
        doc.insert(k.clone(), v.clone());
    }
    bson::from_document(doc).map_err(|e| RepositoryError::serialization(e.to_string()))
}

impl<T: Clone + Serialize + DeserializeOwned> MemStore<T> {
    pub fn all(&self) -> Vec<T> {
        self.items.lock().unwrap().clone()
    }

    fn push(&self, item: T) -> InsertOutcome {
        let id = ObjectId::new();
        let mut doc = bson::to_document(&item).unwrap();
        doc.insert("_id", id);
        self.items.lock().unwrap().push(bson::from_document(doc).unwrap());
        InsertOutcome { inserted_id: id }
    }

    /// Stores a raw document as the database would hold it, whatever its field types.
    pub fn insert_document(&self, doc: Document) -> ObjectId {
        let item: T = bson::from_document(doc).unwrap();
        self.push(item).inserted_id
    }

    fn get(&self, id: ObjectId) -> Option<T> {
        self.all().into_iter().find(|item| id_of(item) == Some(id))
    }

    fn set(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome> {
        if fields.is_empty() {
            return Err(RepositoryError::validation("No fields to update"));
        }
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|item| id_of(&**item) == Some(id)) {
            Some(item) => {
                let before = bson::to_document(&*item).map_err(RepositoryError::from)?;
                *item = apply_set(&*item, &fields)?;
                let after = bson::to_document(&*item).map_err(RepositoryError::from)?;
                let modified = if before == after { 0 } else { 1 };
                Ok(UpdateOutcome { matched_count: 1, modified_count: modified })
            }
            None => Ok(UpdateOutcome::default()),
        }
    }

    fn remove(&self, id: ObjectId) -> DeleteOutcome {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| id_of(item) != Some(id));
        DeleteOutcome { deleted_count: (before - items.len()) as u64 }
    }
}

#[async_trait]
impl UserRepository for MemStore<User> {
    async fn insert(&self, user: User) -> RepositoryResult<InsertOutcome> {
        Ok(self.push(user))
    }
    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.all())
    }
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        Ok(self.all().into_iter().find(|u| u.email == email))
    }
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome> {
        self.set(id, fields)
    }
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        Ok(self.remove(id))
    }
    async fn ensure_admin(&self, email: &str, name: Option<&str>) -> RepositoryResult<UpdateOutcome> {
        let mut items = self.items.lock().unwrap();
        if let Some(user) = items.iter_mut().find(|u| u.email == email) {
            user.role = Some(ADMIN_ROLE.to_string());
            return Ok(UpdateOutcome { matched_count: 1, modified_count: 1 });
        }
        items.push(User {
            id: Some(ObjectId::new()),
            email: email.to_string(),
            name: name.map(str::to_string),
            role: Some(ADMIN_ROLE.to_string()),
            ..Default::default()
        });
        Ok(UpdateOutcome::default())
    }
}

#[async_trait]
impl BannerRepository for MemStore<Banner> {
    async fn insert(&self, banner: Banner) -> RepositoryResult<InsertOutcome> {
        Ok(self.push(banner))
    }
    async fn find_all(&self) -> RepositoryResult<Vec<Banner>> {
        Ok(self.all())
    }
    async fn find_by_status(&self, status: &str) -> RepositoryResult<Vec<Banner>> {
        Ok(self.all().into_iter().filter(|b| b.status.as_deref() == Some(status)).collect())
    }
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome> {
        self.set(id, fields)
    }
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        Ok(self.remove(id))
    }
}

#[async_trait]
impl TestRepository for MemStore<DiagnosticTest> {
    async fn insert(&self, test: DiagnosticTest) -> RepositoryResult<InsertOutcome> {
        Ok(self.push(test))
    }
    async fn find_all(&self) -> RepositoryResult<Vec<DiagnosticTest>> {
        Ok(self.all())
    }
    async fn find_page(&self, skip: u64, limit: i64) -> RepositoryResult<Vec<DiagnosticTest>> {
        let rest = self.all().into_iter().skip(skip as usize);
        Ok(match limit {
            0 => rest.collect(),
            n => rest.take(n.unsigned_abs() as usize).collect(),
        })
    }
    async fn estimated_count(&self) -> RepositoryResult<u64> {
        Ok(self.all().len() as u64)
    }
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<DiagnosticTest>> {
        Ok(self.get(id))
    }
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome> {
        self.set(id, fields)
    }
    async fn record_booking(&self, id: ObjectId) -> RepositoryResult<UpdateOutcome> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|t| t.id == Some(id)) {
            Some(test) => {
                test.slot = Some(bump(test.slot.take(), -1));
                test.bookedCount = Some(bump(test.bookedCount.take(), 1));
                Ok(UpdateOutcome { matched_count: 1, modified_count: 1 })
            }
            None => Ok(UpdateOutcome::default()),
        }
    }
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        Ok(self.remove(id))
    }
}

#[async_trait]
impl AppointmentRepository for MemStore<Appointment> {
    async fn insert(&self, appointment: Appointment) -> RepositoryResult<InsertOutcome> {
        Ok(self.push(appointment))
    }
    async fn find_all(&self, status: Option<&str>) -> RepositoryResult<Vec<Appointment>> {
        Ok(self
            .all()
            .into_iter()
            .filter(|a| status.is_none() || a.status.as_deref() == status)
            .collect())
    }
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Vec<Appointment>> {
        Ok(self.all().into_iter().filter(|a| a.email == email).collect())
    }
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<UpdateOutcome> {
        self.set(id, fields)
    }
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        Ok(self.remove(id))
    }
}

#[async_trait]
impl PaymentRepository for MemStore<PaymentRecord> {
    async fn insert(&self, record: PaymentRecord) -> RepositoryResult<InsertOutcome> {
        Ok(self.push(record))
    }
}

#[async_trait]
impl CatalogRepository for MemStore<CatalogItem> {
    async fn find_all(&self) -> RepositoryResult<Vec<CatalogItem>> {
        Ok(self.all())
    }
}

/// `$inc` on a stored number; a missing field counts from zero.
fn bump(value: Option<Bson>, by: i32) -> Bson {
    match value {
        Some(Bson::Int64(n)) => Bson::Int64(n + by as i64),
        Some(Bson::Double(n)) => Bson::Double(n + by as f64),
        Some(Bson::Int32(n)) => Bson::Int32(n + by),
        _ => Bson::Int32(by),
    }
}

/// Records requested amounts instead of calling Stripe.
#[derive(Default)]
pub struct StubGateway {
    pub requests: Mutex<Vec<(i64, String)>>,
    pub fail: bool,
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent, PaymentError> {
        if self.fail {
            return Err(PaymentError::Rejected { status: 400, message: "card_declined".to_string() });
        }
        self.requests.lock().unwrap().push((amount, currency.to_string()));
        Ok(PaymentIntent {
            id: "pi_test_123".to_string(),
            amount,
            currency: currency.to_string(),
            client_secret: "pi_test_123_secret_abc".to_string(),
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub jwt: Arc<JwtTokenUtilsImpl>,
    pub user_service: Arc<UserServiceImpl>,
    pub users: Arc<MemStore<User>>,
    pub banners: Arc<MemStore<Banner>>,
    pub tests: Arc<MemStore<DiagnosticTest>>,
    pub appointments: Arc<MemStore<Appointment>>,
    pub payments: Arc<MemStore<PaymentRecord>>,
    pub promotions: Arc<MemStore<CatalogItem>>,
    pub gateway: Arc<StubGateway>,
}

impl TestApp {
    /// An app with one admin and one regular user already stored.
    pub fn new() -> Self {
        Self::with_gateway(StubGateway::default())
    }

    pub fn with_gateway(gateway: StubGateway) -> Self {
        let jwt = Arc::new(JwtTokenUtilsImpl::new(JwtConfig::default()));
        let users = Arc::new(MemStore::<User>::default());
        users.push(User {
            email: ADMIN_EMAIL.to_string(),
            role: Some(ADMIN_ROLE.to_string()),
            ..Default::default()
        });
        users.push(User {
            email: PATIENT_EMAIL.to_string(),
            role: Some("user".to_string()),
            ..Default::default()
        });
        let banners = Arc::new(MemStore::<Banner>::default());
        let tests = Arc::new(MemStore::<DiagnosticTest>::default());
        let appointments = Arc::new(MemStore::<Appointment>::default());
        let payments = Arc::new(MemStore::<PaymentRecord>::default());
        let promotions = Arc::new(MemStore::<CatalogItem>::default());
        let recommendations = Arc::new(MemStore::<CatalogItem>::default());
        let gateway = Arc::new(gateway);

        let user_service = Arc::new(UserServiceImpl::new(users.clone(), jwt.clone()));
        let services = AppServices {
            auth_state: Arc::new(AuthState { jwt_utils: jwt.clone(), user_service: user_service.clone() }),
            user_service: user_service.clone(),
            banner_service: Arc::new(BannerServiceImpl::new(banners.clone())),
            test_service: Arc::new(TestServiceImpl::new(tests.clone())),
            appointment_service: Arc::new(AppointmentServiceImpl::new(appointments.clone(), users.clone())),
            payment_service: Arc::new(PaymentServiceImpl::new(gateway.clone(), payments.clone(), "usd".to_string())),
            catalog_service: Arc::new(CatalogServiceImpl::new(promotions.clone(), recommendations)),
        };

        TestApp {
            router: create_router(&services),
            jwt,
            user_service,
            users,
            banners,
            tests,
            appointments,
            payments,
            promotions,
            gateway,
        }
    }

    pub fn token_for(&self, email: &str) -> String {
        self.jwt.generate_token(email, Map::new()).unwrap()
    }

    pub fn admin_token(&self) -> String {
        self.token_for(ADMIN_EMAIL)
    }

    pub fn user_token(&self) -> String {
        self.token_for(PATIENT_EMAIL)
    }

    pub fn seed_test(&self, name: &str, slot: i64) -> ObjectId {
        self.tests
            .push(DiagnosticTest {
                name: name.to_string(),
                slot: Some(Bson::Int64(slot)),
                bookedCount: Some(Bson::Int32(0)),
                price: Some(Bson::Double(25.0)),
                ..Default::default()
            })
            .inserted_id
    }

    pub fn seed_appointment(&self, email: &str, status: &str) -> ObjectId {
        self.appointments
            .push(Appointment {
                email: email.to_string(),
                testName: Some("CBC".to_string()),
                status: Some(status.to_string()),
                ..Default::default()
            })
            .inserted_id
    }

    /// Sends one request and returns the status with the body as JSON
    /// (plain-text bodies come back as a JSON string, empty ones as null).
    pub async fn send(&self, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        self.send_text(method, uri, token, body.map(|b| b.to_string())).await
    }

    /// Like `send`, with the JSON body passed through untouched.
    pub async fn send_text(&self, method: &str, uri: &str, token: Option<&str>, body: Option<String>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let req = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }

    pub async fn send_raw(&self, req: Request<Body>) -> StatusCode {
        self.router.clone().oneshot(req).await.unwrap().status()
    }
}

/// The `_id` of a document returned by the API.
pub fn oid_hex(doc: &Value) -> String {
    doc["_id"].as_str().unwrap_or_default().to_string()
}

pub fn bson_str(doc: &Document, key: &str) -> Option<String> {
    match doc.get(key) {
        Some(Bson::String(s)) => Some(s.clone()),
        _ => None,
    }
}
