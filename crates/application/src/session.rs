//! Console session
//!
//! Holds the state of one operation view: the catalog, the selected
//! operation, its editable draft, the caller-supplied token and the
//! execution state. Executing takes `&mut self`, so a session can never
//! have two executions in flight and the last completed response wins.

use apiconsole_domain::{
    BearerToken, Catalog, ExecutionState, Operation, RequestDraft, Response,
};
use tracing::{debug, warn};

use crate::error::{ApplicationError, ApplicationResult};
use crate::execute_operation::ExecuteOperation;
use crate::ports::HttpClient;

/// One operation view over a catalog.
pub struct ConsoleSession<C: HttpClient> {
    executor: ExecuteOperation<C>,
    catalog: Catalog,
    selected: Option<String>,
    draft: RequestDraft,
    auth_token: Option<BearerToken>,
    state: ExecutionState,
}

impl<C: HttpClient> ConsoleSession<C> {
    /// Creates a session with the first catalog operation selected.
    pub fn new(executor: ExecuteOperation<C>, catalog: Catalog) -> Self {
        let mut session = Self {
            executor,
            catalog,
            selected: None,
            draft: RequestDraft::default(),
            auth_token: None,
            state: ExecutionState::Idle,
        };
        if let Some(first) = session.catalog.first().map(|op| op.id.clone()) {
            session.reseed(first);
        }
        session
    }

    /// Returns the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the selected operation, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Operation> {
        self.selected.as_deref().and_then(|id| self.catalog.get(id))
    }

    /// Selects an operation by id.
    ///
    /// The draft is reseeded (blank parameters, default body) and the
    /// previous response is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::UnknownOperation`] if the id is not in
    /// the catalog.
    pub fn select(&mut self, id: &str) -> ApplicationResult<&Operation> {
        if self.catalog.get(id).is_none() {
            return Err(ApplicationError::UnknownOperation(id.to_string()));
        }
        self.reseed(id.to_string());
        self.selected()
            .ok_or_else(|| ApplicationError::UnknownOperation(id.to_string()))
    }

    fn reseed(&mut self, id: String) {
        self.draft = self
            .catalog
            .get(&id)
            .map(RequestDraft::for_operation)
            .unwrap_or_default();
        self.state = ExecutionState::Idle;
        debug!(operation = %id, "operation selected");
        self.selected = Some(id);
    }

    /// Returns the editable draft.
    #[must_use]
    pub const fn draft(&self) -> &RequestDraft {
        &self.draft
    }

    /// Returns the editable draft for modification.
    pub const fn draft_mut(&mut self) -> &mut RequestDraft {
        &mut self.draft
    }

    /// Sets the bearer token. Blank tokens clear it.
    pub fn set_auth_token(&mut self, token: Option<&str>) {
        self.auth_token = token.and_then(BearerToken::new);
    }

    /// Returns true if a bearer token is set.
    #[must_use]
    pub const fn has_auth_token(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Returns the execution state.
    #[must_use]
    pub const fn state(&self) -> &ExecutionState {
        &self.state
    }

    /// Returns the most recently completed response.
    #[must_use]
    pub fn last_response(&self) -> Option<&Response> {
        self.state.response()
    }

    /// Binds the draft and executes the selected operation.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NoOperationSelected`] if the catalog is
    /// empty. Execution failures are reported inside the returned response.
    pub async fn execute(&mut self) -> ApplicationResult<Response> {
        let operation = self
            .selected()
            .cloned()
            .ok_or(ApplicationError::NoOperationSelected)?;
        let request = self
            .draft
            .bind(&operation)
            .with_auth_token(self.auth_token.clone());
        for (location, name) in self.draft.input.undeclared(&operation) {
            warn!(
                operation = %operation.id,
                %location,
                name,
                "ignoring value for undeclared parameter"
            );
        }

        self.state = ExecutionState::Loading;
        let response = self.executor.execute(&operation, &request).await;
        self.state = ExecutionState::completed(response.clone());

        Ok(response)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    use apiconsole_domain::{HttpMethod, operation::Parameter};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::ports::{HttpClientError, OutboundRequest, TransportResponse};

    struct RecordingClient {
        sent: Mutex<Vec<OutboundRequest>>,
    }

    impl HttpClient for RecordingClient {
        fn send(
            &self,
            request: OutboundRequest,
        ) -> impl Future<Output = Result<TransportResponse, HttpClientError>> + Send {
            let status = if request.url.ends_with("/missing") { 404 } else { 200 };
            self.sent.lock().unwrap().push(request);
            async move {
                Ok(TransportResponse {
                    status,
                    status_text: String::new(),
                    headers: BTreeMap::new(),
                    body: br#"{"ok":true}"#.to_vec(),
                })
            }
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Operation::new("checklist-get", HttpMethod::Get, "/api/v2/check-lists/:id")
                .with_parameter(Parameter::path("id")),
            Operation::new("checklist-create", HttpMethod::Post, "/api/v2/check-lists")
                .with_body_schema(
                    json!({"name": "string (required)", "position": "number (optional)"})
                        .as_object()
                        .unwrap()
                        .clone(),
                ),
        ])
        .unwrap()
    }

    fn session() -> (Arc<RecordingClient>, ConsoleSession<RecordingClient>) {
        let client = Arc::new(RecordingClient {
            sent: Mutex::new(Vec::new()),
        });
        let executor = ExecuteOperation::new(client.clone(), "http://localhost:3000/proxy");
        (client, ConsoleSession::new(executor, catalog()))
    }

    #[test]
    fn test_first_operation_selected_by_default() {
        let (_, session) = session();
        assert_eq!(session.selected().unwrap().id, "checklist-get");
        assert!(session.state().is_idle());
        assert_eq!(session.draft().input.path["id"], "");
    }

    #[test]
    fn test_select_seeds_default_body() {
        let (_, mut session) = session();
        session.select("checklist-create").unwrap();
        assert_eq!(
            session.draft().body_text,
            "{\n  \"name\": \"\",\n  \"position\": 0\n}"
        );
    }

    #[test]
    fn test_select_unknown_operation() {
        let (_, mut session) = session();
        let result = session.select("nope");
        assert!(matches!(result, Err(ApplicationError::UnknownOperation(id)) if id == "nope"));
        assert_eq!(session.selected().unwrap().id, "checklist-get");
    }

    #[tokio::test]
    async fn test_execute_stores_last_response() {
        let (client, mut session) = session();
        session
            .draft_mut()
            .input
            .path
            .insert("id".into(), "missing".into());
        session.set_auth_token(Some("tok"));

        let response = session.execute().await.unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(session.last_response(), Some(&response));
        assert!(!session.state().is_loading());
        let sent = client.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].header("authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_undeclared_input_is_not_sent() {
        let (client, mut session) = session();
        let input = &mut session.draft_mut().input;
        input.path.insert("id".into(), "abc".into());
        input.query.insert("verbose".into(), "1".into());
        input.header.insert("X-Trace".into(), "t-1".into());

        session.execute().await.unwrap();

        let sent = client.sent.lock().unwrap();
        assert_eq!(sent[0].url, "http://localhost:3000/proxy/api/v2/check-lists/abc");
        assert_eq!(sent[0].header("x-trace"), None);
    }

    #[tokio::test]
    async fn test_last_write_wins_and_select_resets() {
        let (_, mut session) = session();
        session.draft_mut().input.path.insert("id".into(), "missing".into());
        session.execute().await.unwrap();
        session.draft_mut().input.path.insert("id".into(), "abc".into());
        session.execute().await.unwrap();
        assert_eq!(session.last_response().unwrap().status, 200);

        session.select("checklist-create").unwrap();
        assert!(session.last_response().is_none());
    }

    #[test]
    fn test_blank_token_is_absent() {
        let (_, mut session) = session();
        session.set_auth_token(Some("   "));
        assert!(!session.has_auth_token());
    }

    #[tokio::test]
    async fn test_empty_catalog_has_nothing_to_execute() {
        let client = Arc::new(RecordingClient {
            sent: Mutex::new(Vec::new()),
        });
        let executor = ExecuteOperation::new(client, "http://localhost:3000/proxy");
        let mut session = ConsoleSession::new(executor, Catalog::default());
        assert!(matches!(
            session.execute().await,
            Err(ApplicationError::NoOperationSelected)
        ));
    }
}
