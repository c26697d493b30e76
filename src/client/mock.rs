//! Mock transports for unit testing
//!
//! [`MockTransport`] replays scripted responses and records every request it
//! sees. [`FakeAclService`] is a small in-memory model of the compute ACL and
//! domain endpoints, used to check end-to-end behaviour of the resource
//! modules without a network.

use std::collections::{BTreeMap, VecDeque};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};

use super::{ApiRequest, ApiResponse, Client, Transport};
use crate::error::{ApiError, Result};

/// Scripted response
enum Scripted {
    Response(ApiResponse),
    Failure(String),
}

/// Transport replaying canned responses in order.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new().respond(200, r#"{"id":"acl-1","name":"a"}"#);
/// let acl = acl::describe(&mock.client(), &input).await?;
/// assert_eq!(mock.requests()[0].path, "/resources/acls/acl-1");
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted::Response(ApiResponse {
                status,
                body: body.as_bytes().to_vec(),
            }));
        self
    }

    /// Queue a JSON response.
    pub fn respond_json(self, status: u16, body: Value) -> Self {
        let text = body.to_string();
        self.respond(status, &text)
    }

    /// Queue a transport failure.
    pub fn fail_with(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted::Failure(message.to_string()));
        self
    }

    /// Build a client over this transport.
    pub fn client(&self) -> Client {
        Client::with_transport(Arc::new(self.clone()))
    }

    /// Requests seen so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests seen so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request);

        match self.responses.lock().unwrap().pop_front() {
            Some(Scripted::Response(r)) => Ok(r),
            Some(Scripted::Failure(m)) => Err(ApiError::Network(m).into()),
            None => Ok(ApiResponse {
                status: 500,
                body: b"no scripted response".to_vec(),
            }),
        }
    }
}

// ============================================================================
// In-memory service
// ============================================================================

#[derive(Default)]
struct FakeState {
    next_id: u64,
    acls: BTreeMap<String, FakeAcl>,
    domains: BTreeMap<String, Value>,
}

#[derive(Default)]
struct FakeAcl {
    name: String,
    entries: Vec<(String, String)>,
}

/// In-memory model of the compute ACL and domain endpoints.
#[derive(Clone, Default)]
pub struct FakeAclService {
    state: Arc<Mutex<FakeState>>,
}

fn reply(status: u16, body: Value) -> ApiResponse {
    ApiResponse {
        status,
        body: if body.is_null() {
            Vec::new()
        } else {
            body.to_string().into_bytes()
        },
    }
}

fn not_found(what: &str) -> ApiResponse {
    reply(
        404,
        json!({"errors": [{"title": "Not Found", "detail": format!("{what} not found")}]}),
    )
}

fn query_param<'a>(request: &'a ApiRequest, key: &str) -> Option<&'a str> {
    request
        .query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Whether `ip` falls inside `prefix` (CIDR notation).
fn prefix_contains(prefix: &str, ip: IpAddr) -> bool {
    let Some((net, len)) = prefix.split_once('/') else {
        return false;
    };
    let (Ok(net), Ok(len)) = (net.parse::<IpAddr>(), len.parse::<u32>()) else {
        return false;
    };
    match (net, ip) {
        (IpAddr::V4(n), IpAddr::V4(a)) if len <= 32 => {
            let mask = if len == 0 { 0 } else { u32::MAX << (32 - len) };
            (u32::from(n) & mask) == (u32::from(a) & mask)
        }
        (IpAddr::V6(n), IpAddr::V6(a)) if len <= 128 => {
            let mask = if len == 0 { 0 } else { u128::MAX << (128 - len) };
            (u128::from(n) & mask) == (u128::from(a) & mask)
        }
        _ => false,
    }
}

impl FakeAclService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(&self) -> Client {
        Client::with_transport(Arc::new(self.clone()))
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let mut state = self.state.lock().unwrap();
        let segments: Vec<String> = request
            .path
            .trim_start_matches('/')
            .split('/')
            .map(|s| urlencoding::decode(s).map(|c| c.into_owned()).unwrap_or_default())
            .collect();
        let segs: Vec<&str> = segments.iter().map(String::as_str).collect();
        let body = request.body.clone().unwrap_or(Value::Null);

        match (&request.method, segs.as_slice()) {
            (&Method::POST, ["resources", "acls"]) => {
                state.next_id += 1;
                let id = format!("acl-{}", state.next_id);
                let name = body["name"].as_str().unwrap_or_default().to_string();
                state.acls.insert(
                    id.clone(),
                    FakeAcl {
                        name: name.clone(),
                        entries: Vec::new(),
                    },
                );
                reply(200, json!({"id": id, "name": name}))
            }
            (&Method::GET, ["resources", "acls"]) => {
                let data: Vec<Value> = state
                    .acls
                    .iter()
                    .map(|(id, acl)| json!({"id": id, "name": acl.name}))
                    .collect();
                let total = data.len();
                reply(200, json!({"data": data, "meta": {"total": total}}))
            }
            (&Method::GET, ["resources", "acls", id]) => match state.acls.get(*id) {
                Some(acl) => reply(200, json!({"id": id, "name": acl.name})),
                None => not_found("acl"),
            },
            (&Method::DELETE, ["resources", "acls", id]) => match state.acls.remove(*id) {
                Some(_) => reply(200, Value::Null),
                None => not_found("acl"),
            },
            (&Method::PATCH, ["resources", "acls", id, "entries"]) => {
                let Some(acl) = state.acls.get_mut(*id) else {
                    return not_found("acl");
                };
                for entry in body["entries"].as_array().cloned().unwrap_or_default() {
                    let prefix = entry["prefix"].as_str().unwrap_or_default().to_string();
                    let action = entry["action"].as_str().unwrap_or_default().to_string();
                    acl.entries.retain(|(p, _)| *p != prefix);
                    if entry["op"] != "delete" {
                        acl.entries.push((prefix, action));
                    }
                }
                reply(202, Value::Null)
            }
            (&Method::GET, ["resources", "acls", id, "entries"]) => {
                let Some(acl) = state.acls.get(*id) else {
                    return not_found("acl");
                };
                let limit: usize = query_param(request, "limit")
                    .and_then(|l| l.parse().ok())
                    .unwrap_or(100);
                let start: usize = query_param(request, "cursor")
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(0);
                let page: Vec<Value> = acl
                    .entries
                    .iter()
                    .skip(start)
                    .take(limit)
                    .map(|(p, a)| json!({"prefix": p, "action": a}))
                    .collect();
                let end = start + page.len();
                let next = if end < acl.entries.len() {
                    end.to_string()
                } else {
                    String::new()
                };
                reply(
                    200,
                    json!({"entries": page, "meta": {"limit": limit, "next_cursor": next}}),
                )
            }
            (&Method::GET, ["resources", "acls", id, "entry", ip]) => {
                let Some(acl) = state.acls.get(*id) else {
                    return not_found("acl");
                };
                let Ok(addr) = ip.parse::<IpAddr>() else {
                    return reply(400, json!({"msg": "invalid ip"}));
                };
                match acl.entries.iter().find(|(p, _)| prefix_contains(p, addr)) {
                    Some((p, a)) => reply(200, json!({"prefix": p, "action": a})),
                    None => reply(204, Value::Null),
                }
            }
            (&Method::POST, ["domains", "v1"]) => {
                state.next_id += 1;
                let id = format!("dom-{}", state.next_id);
                let mut doc = body;
                doc["id"] = json!(id);
                doc["created_at"] = json!("2025-01-15T12:00:00Z");
                doc["updated_at"] = json!("2025-01-15T12:00:00Z");
                state.domains.insert(id, doc.clone());
                reply(201, doc)
            }
            (&Method::GET, ["domains", "v1"]) => {
                let limit: usize = query_param(request, "limit")
                    .and_then(|l| l.parse().ok())
                    .unwrap_or(20);
                let start: usize = query_param(request, "cursor")
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(0);
                let all: Vec<&Value> = state.domains.values().collect();
                let page: Vec<Value> = all.iter().skip(start).take(limit).map(|v| (*v).clone()).collect();
                let end = start + page.len();
                let next = if end < all.len() {
                    end.to_string()
                } else {
                    String::new()
                };
                reply(
                    200,
                    json!({"data": page, "meta": {"limit": limit, "next_cursor": next, "total": all.len()}}),
                )
            }
            (&Method::GET, ["domains", "v1", id]) => match state.domains.get(*id) {
                Some(doc) => reply(200, doc.clone()),
                None => not_found("domain"),
            },
            (&Method::PATCH, ["domains", "v1", id]) => match state.domains.get_mut(*id) {
                Some(doc) => {
                    if let Value::Object(changes) = body {
                        for (k, v) in changes {
                            doc[k.as_str()] = v;
                        }
                    }
                    doc["updated_at"] = json!("2025-01-16T08:30:00Z");
                    reply(200, doc.clone())
                }
                None => not_found("domain"),
            },
            (&Method::DELETE, ["domains", "v1", id]) => match state.domains.remove(*id) {
                Some(_) => reply(204, Value::Null),
                None => not_found("domain"),
            },
            _ => reply(404, json!({"msg": "no route"})),
        }
    }
}

#[async_trait]
impl Transport for FakeAclService {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        Ok(self.handle(&request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_contains_v4() {
        let ip: IpAddr = "1.2.3.4".parse().unwrap();
        assert!(prefix_contains("1.2.3.0/24", ip));
        assert!(!prefix_contains("1.2.4.0/24", ip));
        assert!(prefix_contains("0.0.0.0/0", ip));
    }

    #[test]
    fn test_prefix_contains_v6() {
        let ip: IpAddr = "2001:db8::1".parse().unwrap();
        assert!(prefix_contains("2001:db8::/32", ip));
        assert!(!prefix_contains("1.2.3.0/24", ip));
    }

    #[tokio::test]
    async fn test_mock_defaults_to_server_error() {
        let mock = MockTransport::new();
        let result = mock
            .send(ApiRequest {
                method: Method::GET,
                path: "/".to_string(),
                query: Vec::new(),
                body: None,
            })
            .await
            .unwrap();
        assert_eq!(result.status, 500);
        assert_eq!(mock.call_count(), 1);
    }
}
