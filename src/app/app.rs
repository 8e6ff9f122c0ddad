use axum::{routing::get, Router};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::config::{AdminUserConfig, AppConfig, ConfigError, JwtConfig, MongoConfig, StripeConfig};
use crate::middlewares::auth_middleware::AuthState;
use crate::repository::appointment_repo::MongoAppointmentRepository;
use crate::repository::banner_repo::MongoBannerRepository;
use crate::repository::catalog_repo::MongoCatalogRepository;
use crate::repository::outcome::UpdateOutcome;
use crate::repository::payment_repo::MongoPaymentRepository;
use crate::repository::test_repo::MongoTestRepository;
use crate::repository::user_repo::{MongoUserRepository, UserRepository};
use crate::repository::{PROMOTIONS, RECOMMENDATIONS};
use crate::router::appointment_router::appointment_router;
use crate::router::banner_router::banner_router;
use crate::router::catalog_router::catalog_router;
use crate::router::payment_router::payment_router;
use crate::router::test_router::test_router;
use crate::router::user_router::user_router;
use crate::service::appointment_service::AppointmentServiceImpl;
use crate::service::banner_service::BannerServiceImpl;
use crate::service::catalog_service::CatalogServiceImpl;
use crate::service::payment_service::PaymentServiceImpl;
use crate::service::test_service::TestServiceImpl;
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::jwt::JwtTokenUtilsImpl;
use crate::util::stripe::{PaymentError, StripeGateway};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("Payment gateway error: {0}")]
    Payment(#[from] PaymentError),
    #[error("Invalid listen address: {0}")]
    Address(String),
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Everything the routers need, built once at startup.
pub struct AppServices {
    pub auth_state: Arc<AuthState>,
    pub user_service: Arc<UserServiceImpl>,
    pub banner_service: Arc<BannerServiceImpl>,
    pub test_service: Arc<TestServiceImpl>,
    pub appointment_service: Arc<AppointmentServiceImpl>,
    pub payment_service: Arc<PaymentServiceImpl>,
    pub catalog_service: Arc<CatalogServiceImpl>,
}

/// Builds the full HTTP surface: resource routers, liveness routes, CORS and tracing.
pub fn create_router(services: &AppServices) -> Router {
    Router::new()
        .route("/", get(|| async { "DiagPulse Server is Running" }))
        .route("/health", get(|| async { "OK" }))
        .merge(user_router(services.user_service.clone(), services.auth_state.clone()))
        .merge(banner_router(services.banner_service.clone(), services.auth_state.clone()))
        .merge(test_router(services.test_service.clone(), services.auth_state.clone()))
        .merge(appointment_router(services.appointment_service.clone(), services.auth_state.clone()))
        .merge(payment_router(services.payment_service.clone(), services.auth_state.clone()))
        .merge(catalog_router(services.catalog_service.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

pub struct App {
    config: AppConfig,
    router: Router,
}

impl App {
    pub async fn new() -> Result<Self, AppError> {
        let config = AppConfig::from_env();

        let jwt_config = JwtConfig::from_env()?;
        jwt_config.validate()?;
        let mongo_config = MongoConfig::from_env()?;
        mongo_config.validate()?;
        let stripe_config = StripeConfig::from_env()?;

        let db = mongo_config.connect().await?;
        info!(database = %mongo_config.database, "Connected to MongoDB");

        let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&db));
        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(jwt_config));
        let user_service = Arc::new(UserServiceImpl::new(user_repo.clone(), jwt_utils.clone()));

        let currency = stripe_config.currency.clone();
        let gateway = Arc::new(StripeGateway::new(stripe_config)?);

        let services = AppServices {
            auth_state: Arc::new(AuthState {
                jwt_utils,
                user_service: user_service.clone(),
            }),
            user_service,
            banner_service: Arc::new(BannerServiceImpl::new(Arc::new(MongoBannerRepository::new(&db)))),
            test_service: Arc::new(TestServiceImpl::new(Arc::new(MongoTestRepository::new(&db)))),
            appointment_service: Arc::new(AppointmentServiceImpl::new(
                Arc::new(MongoAppointmentRepository::new(&db)),
                user_repo,
            )),
            payment_service: Arc::new(PaymentServiceImpl::new(
                gateway,
                Arc::new(MongoPaymentRepository::new(&db)),
                currency,
            )),
            catalog_service: Arc::new(CatalogServiceImpl::new(
                Arc::new(MongoCatalogRepository::new(&db, PROMOTIONS)),
                Arc::new(MongoCatalogRepository::new(&db, RECOMMENDATIONS)),
            )),
        };

        match AdminUserConfig::from_env() {
            Ok(admin_conf) => {
                ensure_admin_user(&services.user_service, &admin_conf).await;
            }
            Err(e) => warn!("Admin user config not loaded: {e}"),
        }

        Ok(App { config, router: create_router(&services) })
    }

    pub async fn start(self) -> Result<(), AppError> {
        let host: IpAddr = self
            .config
            .host
            .parse()
            .map_err(|_| AppError::Address(self.config.host.clone()))?;
        let addr = SocketAddr::new(host, self.config.port);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

/// Promotes the configured account to admin, creating it when missing.
/// Failures are logged; startup carries on without an admin.
pub async fn ensure_admin_user(user_service: &UserServiceImpl, admin_conf: &AdminUserConfig) -> Option<UpdateOutcome> {
    match user_service
        .ensure_admin(&admin_conf.email, admin_conf.name.as_deref())
        .await
    {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!("Failed to bootstrap admin user: {e}");
            None
        }
    }
}
