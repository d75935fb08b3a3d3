use std::rc::Rc;

use log::info;
use yew::prelude::*;

use super::packages::format_inr;

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: u64,
    pub service: String,
    pub plan: String,
    pub price: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    next_id: u64,
}

pub enum CartAction {
    Add {
        service: String,
        plan: String,
        price: u32,
    },
    Remove(u64),
}

impl Cart {
    /// Adds a package unless the same service/plan pair is already in the cart.
    /// Returns the new item's id.
    pub fn add(&mut self, service: &str, plan: &str, price: u32) -> Option<u64> {
        if self.contains(service, plan) {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(CartItem {
            id,
            service: service.to_string(),
            plan: plan.to_string(),
            price,
        });
        Some(id)
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn contains(&self, service: &str, plan: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.service == service && item.plan == plan)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn subtotal(&self) -> u32 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Pre-filled message for the checkout contact modal.
    pub fn checkout_message(&self) -> String {
        let lines: Vec<String> = self
            .items
            .iter()
            .map(|item| format!("- {} ({} Plan): {}", item.service, item.plan, format_inr(item.price)))
            .collect();
        format!(
            "Hello, I would like to purchase the following packages:\n{}\nTotal: {}",
            lines.join("\n"),
            format_inr(self.subtotal())
        )
    }
}

impl Reducible for Cart {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            CartAction::Add { service, plan, price } => {
                let added = next.add(&service, &plan, price).is_some();
                if added {
                    info!("Added {} ({}) to cart", service, plan);
                }
                added
            }
            CartAction::Remove(id) => next.remove(id),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_plan_cannot_be_added_twice() {
        let mut cart = Cart::default();
        assert_eq!(cart.add("Landing Pages", "Basic", 11620), Some(0));
        assert_eq!(cart.add("Landing Pages", "Basic", 11620), None);
        assert_eq!(cart.add("Landing Pages", "Standard", 20750), Some(1));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut cart = Cart::default();
        let first = cart.add("Portfolio Websites", "Basic", 8300).unwrap();
        assert!(cart.remove(first));
        assert!(!cart.remove(first));
        let second = cart.add("Portfolio Websites", "Basic", 8300).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn subtotal_sums_prices() {
        let mut cart = Cart::default();
        assert_eq!(cart.subtotal(), 0);
        cart.add("Portfolio Websites", "Basic", 8300);
        cart.add("E-commerce Stores", "Advanced", 149_400);
        assert_eq!(cart.subtotal(), 157_700);
    }

    #[test]
    fn checkout_message_lists_items_and_total() {
        let mut cart = Cart::default();
        cart.add("Portfolio Websites", "Basic", 8300);
        cart.add("Landing Pages", "Standard", 20750);
        assert_eq!(
            cart.checkout_message(),
            "Hello, I would like to purchase the following packages:\n\
             - Portfolio Websites (Basic Plan): ₹8,300\n\
             - Landing Pages (Standard Plan): ₹20,750\n\
             Total: ₹29,050"
        );
    }

    #[test]
    fn reducer_ignores_duplicates_without_new_state() {
        let cart = Rc::new(Cart::default());
        let added = Rc::clone(&cart).reduce(CartAction::Add {
            service: "Landing Pages".to_string(),
            plan: "Basic".to_string(),
            price: 11620,
        });
        assert_eq!(added.len(), 1);

        let again = Rc::clone(&added).reduce(CartAction::Add {
            service: "Landing Pages".to_string(),
            plan: "Basic".to_string(),
            price: 11620,
        });
        assert!(Rc::ptr_eq(&added, &again));

        let id = added.items()[0].id;
        let removed = Rc::clone(&added).reduce(CartAction::Remove(id));
        assert!(removed.is_empty());
    }
}
