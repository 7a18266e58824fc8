/// Telegram user id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

impl From<UserId> for ChatId {
    /// A user's private chat with the bot shares the user's id.
    fn from(user_id: UserId) -> Self {
        ChatId(user_id.0)
    }
}

/// The user an event is about, as delivered with that event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Handle without the leading `@`.
    pub username: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chat {
    pub id: ChatId,
    pub title: Option<String>,
}

/// Membership status of a user within a chat.
///
/// `Banned` also covers Telegram's "kicked" status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberStatus {
    Owner,
    Administrator,
    Member,
    Restricted,
    Left,
    Banned,
}

impl MemberStatus {
    pub const ALL: [MemberStatus; 6] = [
        MemberStatus::Owner,
        MemberStatus::Administrator,
        MemberStatus::Member,
        MemberStatus::Restricted,
        MemberStatus::Left,
        MemberStatus::Banned,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MemberStatus::Owner => "owner",
            MemberStatus::Administrator => "administrator",
            MemberStatus::Member => "member",
            MemberStatus::Restricted => "restricted",
            MemberStatus::Left => "left",
            MemberStatus::Banned => "banned",
        }
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Approval key of a pending join request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JoinRequestId {
    pub chat_id: ChatId,
    pub user_id: UserId,
}

/// A pending request to join a restricted chat.
#[derive(Clone, Debug)]
pub struct JoinRequest {
    pub chat: Chat,
    pub from: User,
}

impl JoinRequest {
    pub fn id(&self) -> JoinRequestId {
        JoinRequestId {
            chat_id: self.chat.id,
            user_id: self.from.id,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MembershipTransition {
    pub prior: MemberStatus,
    pub new: MemberStatus,
}

/// A change of one user's status within a chat.
#[derive(Clone, Debug)]
pub struct MembershipUpdate {
    pub chat: Chat,
    pub user: User,
    pub transition: MembershipTransition,
}
