//! Order management: list submitted leads, move them through the
//! status set.

use obelisk_client::AdminApi;
use obelisk_core::order::{Order, OrderStatus};

use crate::state::PageState;

pub struct OrdersAdminPage {
    pub state: PageState<Vec<Order>>,
}

impl OrdersAdminPage {
    pub async fn load(admin: &AdminApi) -> Self {
        Self {
            state: PageState::from_result(admin.orders().await),
        }
    }

    /// Change one order's status and patch the local copy in place on
    /// success, so the list does not need a full reload.
    pub async fn set_status(
        &mut self,
        admin: &AdminApi,
        id: &str,
        status: OrderStatus,
    ) -> Result<(), String> {
        let updated = admin
            .set_order_status(id, status)
            .await
            .map_err(|e| e.to_string())?;

        if let PageState::Ready(orders) = &mut self.state {
            if let Some(slot) = orders.iter_mut().find(|o| o.id == updated.id) {
                *slot = updated;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_list_patches_in_place() {
        let order = |id: &str, status: OrderStatus| Order {
            id: id.into(),
            name: "Иван".into(),
            phone: "+79001234567".into(),
            message: String::new(),
            status,
            created_at: None,
        };

        let mut page = OrdersAdminPage {
            state: PageState::Ready(vec![order("o1", OrderStatus::New)]),
        };

        // Simulate the in-place patch the mutation performs.
        if let PageState::Ready(orders) = &mut page.state {
            let updated = order("o1", OrderStatus::Done);
            if let Some(slot) = orders.iter_mut().find(|o| o.id == updated.id) {
                *slot = updated;
            }
        }

        let orders = page.state.ready().expect("list stays ready");
        assert_eq!(orders[0].status, OrderStatus::Done);
    }
}
