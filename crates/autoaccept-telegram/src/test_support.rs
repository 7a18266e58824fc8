//! Bot API payload fixtures and a recording platform for adapter tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use teloxide::types::{ChatJoinRequest, ChatMemberUpdated, Message, Update};

use autoaccept_core::{
    config::Config,
    domain::{ChatId, JoinRequestId},
    errors::Error,
    messaging::{port::PlatformPort, types::TextFormat},
    Result,
};

use crate::router::AppState;

pub const GROUP_ID: i64 = -1001;
pub const ADMIN_ID: u64 = 1;
pub const MEMBER_ID: u64 = 2;
pub const REQUESTER_ID: u64 = 42;

const DATE: i64 = 1_700_000_000;

pub fn user_json(id: u64, first_name: &str, username: Option<&str>) -> Value {
    let mut user = json!({
        "id": id,
        "is_bot": false,
        "first_name": first_name,
    });
    if let Some(username) = username {
        user["username"] = json!(username);
    }
    user
}

pub fn group_json() -> Value {
    json!({
        "id": GROUP_ID,
        "type": "group",
        "title": "Test Room",
    })
}

/// A `ChatMember` object with the extra fields each status carries.
pub fn chat_member_json(user: Value, status: &str) -> Value {
    let mut member = match status {
        "creator" => json!({ "is_anonymous": false }),
        "administrator" => json!({
            "can_be_edited": false,
            "is_anonymous": false,
            "can_manage_chat": true,
            "can_delete_messages": true,
            "can_manage_video_chats": true,
            "can_manage_voice_chats": true,
            "can_restrict_members": true,
            "can_promote_members": false,
            "can_change_info": true,
            "can_invite_users": true,
            "can_post_messages": false,
            "can_edit_messages": false,
            "can_pin_messages": true,
            "can_manage_topics": false,
        }),
        "restricted" => json!({
            "is_member": true,
            "until_date": 0,
            "can_send_messages": false,
            "can_send_media_messages": false,
            "can_send_audios": false,
            "can_send_documents": false,
            "can_send_photos": false,
            "can_send_videos": false,
            "can_send_video_notes": false,
            "can_send_voice_notes": false,
            "can_send_polls": false,
            "can_send_other_messages": false,
            "can_add_web_page_previews": false,
            "can_change_info": false,
            "can_invite_users": false,
            "can_pin_messages": false,
            "can_manage_topics": false,
        }),
        "kicked" => json!({ "until_date": 0 }),
        _ => json!({}),
    };
    member["user"] = user;
    member["status"] = json!(status);
    member
}

pub fn join_request_json() -> Value {
    json!({
        "chat": group_json(),
        "from": user_json(REQUESTER_ID, "Ana", Some("ana99")),
        "user_chat_id": REQUESTER_ID,
        "date": DATE,
        "bio": "hello",
    })
}

pub fn join_request() -> ChatJoinRequest {
    serde_json::from_value(join_request_json()).expect("valid chat_join_request")
}

/// `ADMIN_ID` changes `MEMBER_ID`'s status from `old` to `new`.
pub fn member_update_json(old: &str, new: &str) -> Value {
    let member = user_json(MEMBER_ID, "Bo", None);
    json!({
        "chat": group_json(),
        "from": user_json(ADMIN_ID, "Admin", Some("admin")),
        "date": DATE,
        "old_chat_member": chat_member_json(member.clone(), old),
        "new_chat_member": chat_member_json(member, new),
    })
}

pub fn member_update(old: &str, new: &str) -> ChatMemberUpdated {
    serde_json::from_value(member_update_json(old, new)).expect("valid chat_member")
}

pub fn text_message(text: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 10,
        "date": DATE,
        "chat": {
            "id": REQUESTER_ID,
            "type": "private",
            "first_name": "Ana",
        },
        "from": user_json(REQUESTER_ID, "Ana", Some("ana99")),
        "text": text,
    }))
    .expect("valid message")
}

pub fn update(kind: &str, payload: Value) -> Update {
    let mut update = json!({ "update_id": 1 });
    update[kind] = payload;
    serde_json::from_str(&update.to_string()).expect("valid update")
}

/// Records every outbound call; can be told to fail either one.
#[derive(Default)]
pub struct FakePlatform {
    pub fail_approve: bool,
    pub fail_send: bool,
    pub(crate) approvals: Mutex<Vec<JoinRequestId>>,
    pub(crate) sends: Mutex<Vec<(ChatId, String)>>,
}

impl FakePlatform {
    pub fn approvals(&self) -> Vec<JoinRequestId> {
        self.approvals.lock().unwrap().clone()
    }

    pub fn sends(&self) -> Vec<(ChatId, String)> {
        self.sends.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformPort for FakePlatform {
    async fn approve_join_request(&self, request: JoinRequestId) -> Result<()> {
        self.approvals.lock().unwrap().push(request);
        if self.fail_approve {
            return Err(Error::Platform("USER_ALREADY_PARTICIPANT".to_string()));
        }
        Ok(())
    }

    async fn send_message(&self, chat_id: ChatId, text: &str, _format: TextFormat) -> Result<()> {
        self.sends.lock().unwrap().push((chat_id, text.to_string()));
        if self.fail_send {
            return Err(Error::Delivery("Forbidden: bot was blocked by the user".to_string()));
        }
        Ok(())
    }
}

pub fn config() -> Config {
    Config::from_lookup(|key| match key {
        "BOT_TOKEN" => Some("1:test".to_string()),
        "WELCOME_MESSAGE" => Some("Welcome {first_name} to {chat_title}".to_string()),
        "FAREWELL_MESSAGE" => Some("Bye {first_name}".to_string()),
        _ => None,
    })
    .expect("valid test config")
}

pub fn state(platform: &Arc<FakePlatform>) -> Arc<AppState> {
    Arc::new(AppState::new(&config(), platform.clone()))
}
