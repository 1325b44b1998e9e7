use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use iot_platform_backend::config::{CorsConfig, JwtConfig, PasswordConfig, RateLimitConfig, ServerConfig};
use iot_platform_backend::db::Database;
use iot_platform_backend::repositories::{MongoUserRepository, MongoVariableRepository};
use iot_platform_backend::routes::configure_all_routes;
use iot_platform_backend::services::{
    auth::{AuthService, TokenService},
    users::UserService,
    variables::VariableService,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 IoT 플랫폼 백엔드 시작중...");

    JwtConfig::ensure_secret().map_err(|e| {
        error!("❌ {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let database = initialize_database().await?;

    // 리포지토리 생성 및 인덱스 보장
    let user_repo = Arc::new(MongoUserRepository::new(database.clone()));
    let variable_repo = Arc::new(MongoVariableRepository::new(database));

    if let Err(e) = user_repo.create_indexes().await {
        warn!("⚠️ usuarios 인덱스 생성 실패: {}", e);
    }
    if let Err(e) = variable_repo.create_indexes().await {
        warn!("⚠️ variables 인덱스 생성 실패: {}", e);
    }

    // 서비스 조립
    let tokens = Arc::new(TokenService::from_config());
    let users = Arc::new(UserService::new(user_repo, tokens.clone(), PasswordConfig::bcrypt_cost()));
    let auth = web::Data::new(AuthService::new(users.clone(), tokens.clone()));
    let variables = web::Data::new(VariableService::new(variable_repo));
    let tokens = web::Data::from(tokens);
    let users = web::Data::from(users);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Rate Limiting 설정이 잘못되었습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(tokens.clone())
            .app_data(users.clone())
            .app_data(auth.clone())
            .app_data(variables.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => println!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => println!(".env.dev 파일 로드 됨"),
            Err(_) => {
                // 개발 프로필 파일이 없으면 기본 .env
                dotenv().ok();
            }
        },
        _ => {
            dotenv().ok();
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

async fn initialize_database() -> io::Result<Arc<Database>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.map_err(|e| {
        error!("❌ 데이터베이스 연결 실패: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    Ok(Arc::new(database))
}

fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "DELETE", "PATCH", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
