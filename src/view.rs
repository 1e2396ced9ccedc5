use crate::client::{LookupError, OrderApi};
use crate::models::Order;

/// Current state of the lookup view.
///
/// The view is always in exactly one of these states; there are no
/// separate loading or error flags that could drift apart.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Loaded(Order),
    Failed(String),
}

/// The order lookup view.
///
/// One logical lookup at a time. Every lookup carries a monotonic
/// generation tag; a completion whose tag is not the latest one issued is
/// dropped, so a slow response cannot overwrite a newer one.
#[derive(Debug)]
pub struct OrderLookupView {
    state: ViewState,
    generation: u64,
}

impl OrderLookupView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Start a lookup: transitions to `Loading`, clearing any prior order
    /// or error, and returns the generation tag for the request the caller
    /// must issue. Returns `None` when the trimmed query is empty, in
    /// which case nothing changes and no request may be made.
    pub fn begin_lookup(&mut self, query: &str) -> Option<u64> {
        if query.trim().is_empty() {
            return None;
        }

        self.generation += 1;
        self.state = ViewState::Loading;
        Some(self.generation)
    }

    /// Apply the outcome of the lookup tagged `generation`.
    pub fn finish_lookup(&mut self, generation: u64, result: Result<Order, LookupError>) {
        if generation != self.generation {
            return;
        }

        self.state = match result {
            Ok(order) => ViewState::Loaded(order),
            Err(err) => ViewState::Failed(err.to_string()),
        };
    }

    /// Run one full lookup against `api`: a no-op on an empty query,
    /// otherwise exactly one request followed by a terminal transition.
    pub async fn submit_lookup(&mut self, query: &str, api: &dyn OrderApi) {
        let generation = match self.begin_lookup(query) {
            Some(generation) => generation,
            None => return,
        };

        let result = api.fetch_order(query.trim()).await;
        self.finish_lookup(generation, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Delivery, Item, Payment};
    use chrono::{TimeZone, Utc};

    fn sample_order() -> Order {
        Order {
            order_uid: "b563feb7b2b84b6test".to_string(),
            track_number: "WBILMTESTTRACK".to_string(),
            entry: "WBIL".to_string(),
            delivery: Delivery {
                name: "Test Testov".to_string(),
                phone: "+9720000000".to_string(),
                zip: "2639809".to_string(),
                city: "Kiryat Mozkin".to_string(),
                address: "Ploshad Mira 15".to_string(),
                region: "Kraiot".to_string(),
                email: "test@gmail.com".to_string(),
            },
            payment: Payment {
                transaction: "b563feb7b2b84b6test".to_string(),
                request_id: String::new(),
                currency: "USD".to_string(),
                provider: "wbpay".to_string(),
                amount: 1817,
                payment_dt: 1637907727,
                bank: "alpha".to_string(),
                delivery_cost: 1500,
                goods_total: 317,
                custom_fee: 0,
            },
            items: vec![Item {
                chrt_id: 9934930,
                track_number: "WBILMTESTTRACK".to_string(),
                price: 453,
                rid: "ab4219087a764ae0btest".to_string(),
                name: "Mascaras".to_string(),
                sale: 30,
                size: "0".to_string(),
                total_price: 317,
                nm_id: 2389212,
                brand: "Vivienne Sabo".to_string(),
                status: 202,
            }],
            locale: "en".to_string(),
            internal_signature: String::new(),
            customer_id: "test".to_string(),
            delivery_service: "meest".to_string(),
            shardkey: "9".to_string(),
            sm_id: 99,
            date_created: Utc.with_ymd_and_hms(2021, 11, 26, 6, 22, 19).unwrap(),
            oof_shard: "1".to_string(),
        }
    }

    #[test]
    fn begin_lookup_sets_loading_before_any_io() {
        let mut view = OrderLookupView::new();

        let generation = view.begin_lookup("b563feb7b2b84b6test");

        assert!(generation.is_some());
        assert_eq!(*view.state(), ViewState::Loading);
    }

    #[test]
    fn empty_query_is_a_no_op() {
        let mut view = OrderLookupView::new();

        assert!(view.begin_lookup("").is_none());
        assert!(view.begin_lookup("   \t").is_none());
        assert_eq!(*view.state(), ViewState::Idle);
    }

    #[test]
    fn empty_query_leaves_prior_error_visible() {
        let mut view = OrderLookupView::new();
        let generation = view.begin_lookup("missing").unwrap();
        view.finish_lookup(generation, Err(LookupError::NotFound));

        assert!(view.begin_lookup("  ").is_none());
        assert_eq!(*view.state(), ViewState::Failed("Order not found".to_string()));
    }

    #[test]
    fn begin_lookup_clears_prior_error() {
        let mut view = OrderLookupView::new();
        let generation = view.begin_lookup("missing").unwrap();
        view.finish_lookup(generation, Err(LookupError::NotFound));

        view.begin_lookup("b563feb7b2b84b6test").unwrap();

        assert_eq!(*view.state(), ViewState::Loading);
    }

    #[test]
    fn finish_lookup_success_loads_order() {
        let mut view = OrderLookupView::new();
        let generation = view.begin_lookup("b563feb7b2b84b6test").unwrap();

        view.finish_lookup(generation, Ok(sample_order()));

        assert_eq!(*view.state(), ViewState::Loaded(sample_order()));
    }

    #[test]
    fn finish_lookup_failure_keeps_message() {
        let mut view = OrderLookupView::new();
        let generation = view.begin_lookup("b563feb7b2b84b6test").unwrap();

        view.finish_lookup(generation, Err(LookupError::Transport("network down".to_string())));

        assert_eq!(*view.state(), ViewState::Failed("network down".to_string()));
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut view = OrderLookupView::new();
        let first = view.begin_lookup("first").unwrap();
        let second = view.begin_lookup("second").unwrap();

        view.finish_lookup(first, Err(LookupError::Transport("slow response".to_string())));
        assert_eq!(*view.state(), ViewState::Loading);

        view.finish_lookup(second, Ok(sample_order()));
        assert_eq!(*view.state(), ViewState::Loaded(sample_order()));

        // and the stale one stays dropped even after the newer completion
        view.finish_lookup(first, Err(LookupError::NotFound));
        assert_eq!(*view.state(), ViewState::Loaded(sample_order()));
    }
}
