use std::sync::Arc;

use async_graphql::http::{GraphiQLSource, parse_query_string};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;

use super::BookshelfSchema;
use crate::config::ServerSettings;
use crate::error::{BookshelfError, Result};

#[derive(Clone)]
struct ServerState {
    schema: BookshelfSchema,
    /// Rendered GraphiQL page, if the explorer is enabled.
    graphiql: Option<Arc<str>>,
}

/// Build the axum router serving `schema` at `settings.path`.
pub fn router(schema: BookshelfSchema, settings: &ServerSettings) -> Router {
    let graphiql = settings
        .graphiql
        .then(|| GraphiQLSource::build().endpoint(&settings.path).finish().into());

    Router::new()
        .route(&settings.path, get(graphql_get).post(graphql_post))
        .with_state(ServerState { schema, graphiql })
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn run_server(schema: BookshelfSchema, settings: &ServerSettings) -> Result<()> {
    let listener = TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .map_err(|e| {
            BookshelfError::Server(format!(
                "Cannot bind {}:{}: {}",
                settings.host, settings.port, e
            ))
        })?;

    serve(listener, schema, settings).await
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve(
    listener: TcpListener,
    schema: BookshelfSchema,
    settings: &ServerSettings,
) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(
        %addr,
        path = %settings.path,
        graphiql = settings.graphiql,
        "GraphQL server listening"
    );

    axum::serve(listener, router(schema, settings))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn graphql_post(State(state): State<ServerState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

async fn graphql_get(
    State(state): State<ServerState>,
    RawQuery(query): RawQuery,
) -> Response {
    // A bare `?` carries no request, same as no query string at all.
    let query = query.filter(|q| !q.is_empty());
    match (query, state.graphiql) {
        (Some(query), _) => match parse_query_string(&query) {
            Ok(req) => GraphQLResponse::from(state.schema.execute(req).await).into_response(),
            Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        },
        (None, Some(page)) => Html(page.to_string()).into_response(),
        (None, None) => (StatusCode::BAD_REQUEST, "Missing 'query' parameter").into_response(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Cannot listen for Ctrl-C, serving until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
