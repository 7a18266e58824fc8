//! Telegram payloads → core domain types.

use teloxide::types::{self as tg, ChatMemberKind};

use autoaccept_core::domain::{
    Chat, ChatId, JoinRequest, MemberStatus, MembershipTransition, MembershipUpdate, User, UserId,
};

pub fn user(u: &tg::User) -> User {
    User {
        id: UserId(u.id.0 as i64),
        first_name: u.first_name.clone(),
        last_name: u.last_name.clone(),
        username: u.username.clone(),
    }
}

pub fn chat(c: &tg::Chat) -> Chat {
    Chat {
        id: ChatId(c.id.0),
        title: c.title().map(str::to_string),
    }
}

pub fn member_status(kind: &ChatMemberKind) -> MemberStatus {
    match kind {
        ChatMemberKind::Owner(_) => MemberStatus::Owner,
        ChatMemberKind::Administrator(_) => MemberStatus::Administrator,
        ChatMemberKind::Member => MemberStatus::Member,
        ChatMemberKind::Restricted(_) => MemberStatus::Restricted,
        ChatMemberKind::Left => MemberStatus::Left,
        ChatMemberKind::Banned(_) => MemberStatus::Banned,
    }
}

pub fn join_request(r: &tg::ChatJoinRequest) -> JoinRequest {
    JoinRequest {
        chat: chat(&r.chat),
        from: user(&r.from),
    }
}

/// The affected user is the one in `new_chat_member`, not the actor in `from`
/// (an admin banning someone is the `from`).
pub fn membership_update(u: &tg::ChatMemberUpdated) -> MembershipUpdate {
    MembershipUpdate {
        chat: chat(&u.chat),
        user: user(&u.new_chat_member.user),
        transition: MembershipTransition {
            prior: member_status(&u.old_chat_member.kind),
            new: member_status(&u.new_chat_member.kind),
        },
    }
}
