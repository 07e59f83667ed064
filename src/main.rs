// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use internlink::config::settings::Settings;
use internlink::domain::repositories::vcs_metrics::{NoopVcsMetrics, VcsMetrics};
use internlink::infrastructure::database::connection;
use internlink::infrastructure::repositories::attendance_repo_impl::AttendanceRepositoryImpl;
use internlink::infrastructure::repositories::cohort_repo_impl::CohortRepositoryImpl;
use internlink::infrastructure::repositories::task_progress_repo_impl::TaskProgressRepositoryImpl;
use internlink::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use internlink::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use internlink::infrastructure::vcs::gitlab_metrics::GitLabMetricsClient;
use internlink::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use internlink::presentation::routes;
use internlink::utils::telemetry;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting internlink...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize repositories
    let task_repo = Arc::new(TaskRepositoryImpl::new(db.clone()));
    let progress_repo = Arc::new(TaskProgressRepositoryImpl::new(db.clone()));
    let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
    let attendance_repo = Arc::new(AttendanceRepositoryImpl::new(db.clone()));
    let cohort_repo = Arc::new(CohortRepositoryImpl::new(db.clone()));

    // 5. Initialize VCS metrics collaborator
    let vcs: Arc<dyn VcsMetrics> = match &settings.gitlab.base_url {
        Some(base_url) => {
            info!("GitLab metrics enabled");
            Arc::new(GitLabMetricsClient::new(
                base_url.clone(),
                settings.gitlab.token.clone(),
            ))
        }
        None => {
            info!("GitLab metrics disabled, commit counts default to zero");
            Arc::new(NoopVcsMetrics)
        }
    };

    // 6. Assemble router
    let auth_state = AuthState { db: db.clone() };
    let app = routes::routes()
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .layer(Extension(task_repo))
        .layer(Extension(progress_repo))
        .layer(Extension(user_repo))
        .layer(Extension(attendance_repo))
        .layer(Extension(cohort_repo))
        .layer(Extension(vcs))
        .layer(Extension(settings.clone()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
