//! MCP tool handlers for the contact list server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::config::Config;
use crate::domain::{Category, ContactId};
use crate::error::StoreError;
use crate::matching::{ContactMatcher, ContactQuery};
use crate::prompt::{Confirmation, PresetPrompt};
use crate::screen::{ContactRow, ContactScreen, DeleteOutcome};
use crate::store::ContactList;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The MCP server that exposes the contact-list screen as tools.
#[derive(Clone)]
pub struct ContactListServer {
    // One screen per session; the mutex keeps tool calls from interleaving
    screen: Arc<Mutex<ContactScreen>>,
    matcher: ContactMatcher,
    max_match_results: usize,
    match_confidence_threshold: u8,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactListServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-list".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact list kept in memory for this session - add, edit, delete and search contacts (name, phone, category). Positions shift after a delete; list the contacts again before reusing one.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GetContactParams {
    /// Zero-based position in the list
    #[serde(default)]
    position: Option<usize>,
    /// Id returned when the contact was added, e.g. "contact_3"
    #[serde(default)]
    contact_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactParams {
    name: String,
    phone: String,
    /// Work, Family or Personal; the configured default when omitted
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct EditContactParams {
    #[serde(default)]
    position: Option<usize>,
    #[serde(default)]
    contact_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct DeleteContactParams {
    #[serde(default)]
    position: Option<usize>,
    #[serde(default)]
    contact_id: Option<String>,
    /// Answer to the "Delete contact?" prompt
    #[serde(default)]
    confirm: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchContactsParams {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    max_results: Option<usize>,
    #[serde(default)]
    min_confidence: Option<u8>,
}

// Every failure here is a rejected request, shown to the caller as a notice
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// A contact is addressed by its position or by its stable id, not both
fn resolve_position(
    contacts: &ContactList,
    position: Option<usize>,
    contact_id: Option<&str>,
) -> Result<usize, McpError> {
    match (position, contact_id) {
        (Some(position), None) => Ok(position),
        (None, Some(id)) => {
            let id = id.parse::<ContactId>().map_err(to_mcp_error)?;
            contacts
                .position_of(&id)
                .ok_or_else(|| to_mcp_error(StoreError::NotFound(id)))
        }
        _ => Err(to_mcp_error("Provide either position or contact_id")),
    }
}

fn rows_json(rows: &[ContactRow], empty_message: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "count": rows.len(),
        "contacts": rows,
        "empty_message": empty_message,
    })
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl ContactListServer {
    /// Create a server around a fresh, empty screen.
    pub fn new(config: &Config) -> Self {
        Self {
            screen: Arc::new(Mutex::new(ContactScreen::new(config.default_category))),
            matcher: ContactMatcher::new(),
            max_match_results: config.max_match_results,
            match_confidence_threshold: config.match_confidence_threshold,
            tool_router: Self::tool_router(),
        }
    }

    /// Rows as currently rendered.
    pub async fn rows(&self) -> Vec<ContactRow> {
        self.screen.lock().await.rows()
    }

    /// List all contacts in display order.
    #[tool(description = "List all contacts in display order with their positions")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let screen = self.screen.lock().await;
        json_result(&rows_json(&screen.rows(), screen.empty_message()))
    }

    /// Get a contact by position or id.
    #[tool(description = "Get a contact by zero-based position or by contact_id")]
    async fn get_contact(
        &self,
        params: Parameters<GetContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let screen = self.screen.lock().await;
        let position = resolve_position(
            screen.contacts(),
            params.position,
            params.contact_id.as_deref(),
        )?;
        let contact = screen.contacts().get(position).map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "position": position,
            "contact": contact,
        }))
    }

    /// Add a contact at the end of the list.
    #[tool(description = "Add a contact at the end of the list. Name and phone are required.")]
    async fn add_contact(
        &self,
        params: Parameters<AddContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: add_contact called");

        let mut screen = self.screen.lock().await;
        screen.open_new_form();
        screen.set_name(params.name);
        screen.set_phone(params.phone);
        if let Some(category) = params.category {
            screen.set_category(category);
        }

        let result = screen.submit_form();
        if result.is_err() {
            screen.cancel_form();
        }
        let contacts = result.map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "position": contacts.len() - 1,
            "contact": contacts.get(contacts.len() - 1).map_err(to_mcp_error)?,
        }))
    }

    /// Edit a contact; omitted fields keep their value.
    #[tool(
        description = "Edit a contact given by zero-based position or contact_id. Omitted fields keep their current value."
    )]
    async fn edit_contact(
        &self,
        params: Parameters<EditContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: edit_contact called");
        tracing::debug!(
            "Parameters: position={:?}, contact_id={:?}",
            params.position,
            params.contact_id
        );

        let mut screen = self.screen.lock().await;
        let position = resolve_position(
            screen.contacts(),
            params.position,
            params.contact_id.as_deref(),
        )?;
        screen.open_edit_form(position).map_err(to_mcp_error)?;
        if let Some(name) = params.name {
            screen.set_name(name);
        }
        if let Some(phone) = params.phone {
            screen.set_phone(phone);
        }
        if let Some(category) = params.category {
            screen.set_category(category);
        }

        let result = screen.submit_form();
        if result.is_err() {
            screen.cancel_form();
        }
        let contacts = result.map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "position": position,
            "contact": contacts.get(position).map_err(to_mcp_error)?,
        }))
    }

    /// Delete a contact once confirmed.
    #[tool(
        description = "Delete a contact given by zero-based position or contact_id. Asks 'Delete contact?'; pass confirm=true to answer yes. Later contacts move up by one position."
    )]
    async fn delete_contact(
        &self,
        params: Parameters<DeleteContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: delete_contact called");

        let prompt = PresetPrompt(Confirmation::from(params.confirm));
        let mut screen = self.screen.lock().await;
        let position = resolve_position(
            screen.contacts(),
            params.position,
            params.contact_id.as_deref(),
        )?;
        let outcome = screen
            .request_delete(position, &prompt)
            .await
            .map_err(to_mcp_error)?;

        let response = match outcome {
            DeleteOutcome::Deleted(contact) => serde_json::json!({
                "deleted": true,
                "contact": contact,
                "remaining": screen.contacts().len(),
            }),
            DeleteOutcome::Cancelled => serde_json::json!({
                "deleted": false,
                "remaining": screen.contacts().len(),
            }),
        };

        json_result(&response)
    }

    /// Search contacts by name and phone.
    #[tool(
        description = "Search contacts by fuzzy name or exact phone digits, optionally within one category. Returns positions and confidence scores."
    )]
    async fn search_contacts(
        &self,
        params: Parameters<SearchContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let category = params
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()
            .map_err(to_mcp_error)?;

        let query = ContactQuery {
            name: params.name,
            phone: params.phone,
            category,
        };

        let contacts = self.screen.lock().await.contacts().clone();
        let results = self
            .matcher
            .find_matches(
                &query,
                contacts.as_slice(),
                params.max_results.unwrap_or(self.max_match_results),
                params
                    .min_confidence
                    .unwrap_or(self.match_confidence_threshold),
            )
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "result_count": results.len(),
            "results": results.iter().map(|r| {
                serde_json::json!({
                    "position": r.position,
                    "contact": r.contact,
                    "confidence": r.confidence,
                    "match_type": format!("{:?}", r.match_type),
                })
            }).collect::<Vec<_>>(),
        }))
    }
}
