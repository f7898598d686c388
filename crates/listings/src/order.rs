use serde::{Deserialize, Serialize};

use travelhome_core::{Entity, ItemId, OrderId, UserId, ValueObject};

/// An order placed by a customer. Its items live in the order-item join, which
/// the store owns and exposes through explicit queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user_id: Option<UserId>,
}

impl Order {
    pub fn new(user_id: Option<UserId>) -> Self {
        Self {
            id: OrderId::new(),
            user_id,
        }
    }

    pub fn with_id(id: OrderId, user_id: Option<UserId>) -> Self {
        Self { id, user_id }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Option<&Self::Id> {
        Some(&self.id)
    }
}

/// Join record: one item placed on one order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: OrderId,
    pub item_id: ItemId,
}

impl ValueObject for OrderItem {}
