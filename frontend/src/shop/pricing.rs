use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use super::cart::{Cart, CartAction, CartItem};
use super::packages::{format_inr, Package, SERVICES};
use crate::config;

#[derive(Properties, PartialEq)]
struct PackageCardProps {
    package: &'static Package,
    in_cart: bool,
    on_add: Callback<()>,
}

#[function_component(PackageCard)]
fn package_card(props: &PackageCardProps) -> Html {
    let just_added = use_state(|| false);

    let onclick = {
        let just_added = just_added.clone();
        let on_add = props.on_add.clone();
        let in_cart = props.in_cart;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if in_cart {
                return;
            }
            on_add.emit(());
            just_added.set(true);
            let just_added = just_added.clone();
            let timeout = Timeout::new(config::ADDED_BADGE_MS, move || {
                just_added.set(false);
            });
            timeout.forget();
        })
    };

    let added = *just_added || props.in_cart;
    let package = props.package;

    html! {
        <div class={classes!("package-card", package.is_featured().then_some("featured"))}>
            <h4>{package.name}</h4>
            <p class="package-price">{format_inr(package.price())}</p>
            <p class="package-terms">{"one-time payment"}</p>
            <ul class="package-features">
                { for package.features.iter().map(|feature| html! {
                    <li><span class="feature-check">{"✓"}</span>{*feature}</li>
                }) }
            </ul>
            <p class="package-includes">{package.includes_note()}</p>
            <button
                role="button"
                class={classes!("package-button", added.then_some("added"))}
                disabled={added}
                {onclick}
            >
                { if added { "✓ Added!" } else { "Add to Cart" } }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CartSidebarProps {
    open: bool,
    items: Vec<CartItem>,
    subtotal: u32,
    on_close: Callback<()>,
    on_remove: Callback<u64>,
    on_checkout: Callback<()>,
}

#[function_component(CartSidebar)]
fn cart_sidebar(props: &CartSidebarProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let checkout = {
        let on_checkout = props.on_checkout.clone();
        Callback::from(move |_: MouseEvent| on_checkout.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="cart-overlay" onclick={close.clone()}>
            <aside class="cart-sidebar" onclick={stop}>
                <div class="cart-header">
                    <h2>{"Your Cart"}</h2>
                    <button class="icon-button" onclick={close}>{"✕"}</button>
                </div>
                {
                    if props.items.is_empty() {
                        html! {
                            <div class="cart-empty">
                                <span class="cart-empty-icon">{"🛒"}</span>
                                <h3>{"Your cart is empty"}</h3>
                                <p>{"Add a service to get started."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                <div class="cart-items">
                                    { for props.items.iter().map(|item| {
                                        let remove = {
                                            let on_remove = props.on_remove.clone();
                                            let id = item.id;
                                            Callback::from(move |_: MouseEvent| on_remove.emit(id))
                                        };
                                        html! {
                                            <div class="cart-item" key={item.id}>
                                                <div>
                                                    <p class="cart-item-service">{&item.service}</p>
                                                    <p class="cart-item-plan">{format!("{} Plan", item.plan)}</p>
                                                </div>
                                                <div class="cart-item-side">
                                                    <p>{format_inr(item.price)}</p>
                                                    <button class="icon-button remove" onclick={remove}>{"🗑"}</button>
                                                </div>
                                            </div>
                                        }
                                    }) }
                                </div>
                                <div class="cart-footer">
                                    <div class="cart-subtotal">
                                        <span>{"Subtotal"}</span>
                                        <span>{format_inr(props.subtotal)}</span>
                                    </div>
                                    <button class="checkout-button" onclick={checkout}>{"Proceed to Checkout"}</button>
                                </div>
                            </>
                        }
                    }
                }
            </aside>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CheckoutModalProps {
    open: bool,
    message: String,
    on_close: Callback<()>,
}

#[function_component(CheckoutModal)]
fn checkout_modal(props: &CheckoutModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="checkout-modal" onclick={stop}>
                <h3>{"Contact Us to Proceed"}</h3>
                <textarea readonly={true} value={props.message.clone()} />
                <div class="modal-actions">
                    <button class="checkout-button" onclick={close}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let cart = use_reducer(Cart::default);
    let selected_tab = use_state(|| 0usize);
    let cart_open = use_state(|| false);
    let checkout_open = use_state(|| false);

    let open_cart = {
        let cart_open = cart_open.clone();
        Callback::from(move |_: MouseEvent| cart_open.set(true))
    };
    let close_cart = {
        let cart_open = cart_open.clone();
        Callback::from(move |_| cart_open.set(false))
    };
    let remove_item = {
        let cart = cart.clone();
        Callback::from(move |id: u64| cart.dispatch(CartAction::Remove(id)))
    };
    let checkout = {
        let cart_open = cart_open.clone();
        let checkout_open = checkout_open.clone();
        let count = cart.len();
        Callback::from(move |_| {
            info!("Opening checkout with {} item(s)", count);
            cart_open.set(false);
            checkout_open.set(true);
        })
    };
    let close_checkout = {
        let checkout_open = checkout_open.clone();
        Callback::from(move |_| checkout_open.set(false))
    };

    let service = &SERVICES[(*selected_tab).min(SERVICES.len() - 1)];

    html! {
        <section id="services" class="services-section">
            <style>{SERVICES_CSS}</style>
            <button class="cart-fab" onclick={open_cart}>
                {"🛒"}
                { if !cart.is_empty() {
                    html! { <span class="cart-badge">{cart.len().to_string()}</span> }
                } else {
                    html! {}
                } }
            </button>

            <div class="services-grid">
                <div class="services-intro">
                    <h2>{"Our Services & Pricing"}</h2>
                    <p>{"Select a service to see our tailored packages. Add any plan to the cart to get started."}</p>
                    <div class="service-tabs">
                        { for SERVICES.iter().enumerate().map(|(index, s)| {
                            let onclick = {
                                let selected_tab = selected_tab.clone();
                                Callback::from(move |_: MouseEvent| selected_tab.set(index))
                            };
                            html! {
                                <button
                                    key={s.title}
                                    class={classes!("service-tab", (*selected_tab == index).then_some("active"))}
                                    {onclick}
                                >
                                    {s.title}
                                </button>
                            }
                        }) }
                    </div>
                </div>

                <div class="services-panel" key={*selected_tab}>
                    <h3>{service.title}</h3>
                    <p class="price-note">
                        {"Note: The prices shown are indicative and may change based on your specific requirements."}
                    </p>
                    <div class="package-grid">
                        { for service.packages.iter().map(|package| {
                            let on_add = {
                                let cart = cart.clone();
                                let title = service.title;
                                Callback::from(move |_| cart.dispatch(CartAction::Add {
                                    service: title.to_string(),
                                    plan: package.name.to_string(),
                                    price: package.price(),
                                }))
                            };
                            html! {
                                <PackageCard
                                    key={package.name}
                                    {package}
                                    in_cart={cart.contains(service.title, package.name)}
                                    {on_add}
                                />
                            }
                        }) }
                    </div>
                </div>
            </div>

            <CartSidebar
                open={*cart_open}
                items={cart.items().to_vec()}
                subtotal={cart.subtotal()}
                on_close={close_cart}
                on_remove={remove_item}
                on_checkout={checkout}
            />
            <CheckoutModal
                open={*checkout_open}
                message={cart.checkout_message()}
                on_close={close_checkout}
            />
        </section>
    }
}

const SERVICES_CSS: &str = r#"
    .services-section {
        position: relative;
        padding: 8rem 1.5rem;
        background: #111111;
        overflow: hidden;
    }
    .services-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 1fr 2fr;
        gap: 3rem;
        align-items: start;
    }
    .services-intro h2 {
        font-size: 3rem;
        font-weight: 700;
        color: #fff;
        letter-spacing: -0.04em;
    }
    .services-intro p {
        color: #9ca3af;
        line-height: 1.7;
    }
    .service-tabs {
        margin-top: 2.5rem;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }
    .service-tab {
        text-align: left;
        padding: 1rem;
        border-radius: 0.5rem;
        border: 1px solid transparent;
        background: transparent;
        color: #9ca3af;
        font-size: 1.125rem;
        font-weight: 600;
        transition: all 0.3s ease;
    }
    .service-tab:hover,
    .service-tab.active {
        color: #fff;
        background: rgba(255, 255, 255, 0.1);
        border-color: rgba(255, 255, 255, 0.2);
    }
    .services-panel {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        padding: 2rem;
        animation: panel-in 0.4s ease-out;
    }
    .services-panel h3 {
        color: #fff;
        font-size: 1.875rem;
        margin-bottom: 1.5rem;
    }
    .price-note {
        color: #9ca3af;
        font-size: 0.875rem;
        font-style: italic;
        margin-bottom: 1.5rem;
    }
    .package-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .package-card {
        display: flex;
        flex-direction: column;
        padding: 1.5rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.7);
        border: 1px solid #e5e7eb;
        color: #111827;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .package-card:hover {
        transform: translateY(-8px) scale(1.03);
    }
    .package-card.featured {
        background: #fff;
        border-color: #10b981;
        box-shadow: 0 25px 50px -12px rgba(16, 185, 129, 0.2);
    }
    .package-price {
        margin-top: 0.5rem;
        font-size: 2.25rem;
        font-weight: 800;
        background: linear-gradient(to right, #059669, #14b8a6);
        -webkit-background-clip: text;
        color: transparent;
    }
    .package-terms,
    .package-includes {
        font-size: 0.875rem;
        color: #6b7280;
    }
    .package-features {
        margin-top: 1.5rem;
        flex-grow: 1;
        list-style: none;
        padding: 0;
        color: #4b5563;
        font-size: 0.875rem;
    }
    .feature-check {
        display: inline-flex;
        width: 1.25rem;
        height: 1.25rem;
        margin-right: 0.75rem;
        align-items: center;
        justify-content: center;
        border-radius: 9999px;
        background: #d1fae5;
        color: #059669;
    }
    .package-button,
    .checkout-button {
        margin-top: 2rem;
        width: 100%;
        padding: 0.75rem;
        border: none;
        border-radius: 0.5rem;
        font-weight: 600;
        color: #fff;
        background: #1f2937;
    }
    .package-card.featured .package-button,
    .checkout-button {
        background: #059669;
    }
    .package-button.added {
        background: #22c55e;
        cursor: not-allowed;
    }
    .cart-fab {
        position: fixed;
        top: 1.5rem;
        right: 1.5rem;
        z-index: 50;
        padding: 0.75rem;
        border-radius: 9999px;
        background: rgba(0, 0, 0, 0.3);
        border: 1px solid rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(16px);
        font-size: 1.25rem;
    }
    .cart-badge {
        position: absolute;
        top: -0.25rem;
        right: -0.25rem;
        width: 1.25rem;
        height: 1.25rem;
        border-radius: 9999px;
        background: #10b981;
        color: #fff;
        font-size: 0.75rem;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .cart-overlay,
    .modal-overlay {
        position: fixed;
        inset: 0;
        z-index: 9000;
        background: rgba(0, 0, 0, 0.6);
        animation: fade-in 0.2s ease-out;
    }
    .modal-overlay {
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .cart-sidebar {
        position: absolute;
        top: 0;
        right: 0;
        width: 100%;
        max-width: 28rem;
        height: 100%;
        display: flex;
        flex-direction: column;
        background: #1c1c1c;
        color: #fff;
        animation: slide-in 0.3s ease-out;
    }
    .cart-header,
    .cart-footer {
        display: flex;
        padding: 1.5rem;
        border-color: rgba(255, 255, 255, 0.1);
    }
    .cart-header {
        justify-content: space-between;
        align-items: center;
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .cart-footer {
        flex-direction: column;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }
    .cart-items {
        flex-grow: 1;
        overflow-y: auto;
        padding: 1.5rem;
    }
    .cart-item {
        display: flex;
        justify-content: space-between;
        margin-bottom: 1rem;
    }
    .cart-item-plan {
        color: #9ca3af;
        font-size: 0.875rem;
    }
    .cart-item-side {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .cart-subtotal {
        display: flex;
        justify-content: space-between;
        font-size: 1.125rem;
        font-weight: 700;
    }
    .cart-empty {
        flex-grow: 1;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .cart-empty-icon {
        font-size: 3rem;
    }
    .icon-button {
        background: none;
        border: none;
        color: inherit;
        padding: 0.5rem;
        border-radius: 9999px;
    }
    .icon-button.remove:hover {
        color: #ef4444;
    }
    .checkout-modal {
        width: 100%;
        max-width: 32rem;
        padding: 2rem;
        border-radius: 0.75rem;
        background: #1c1c1c;
        color: #fff;
    }
    .checkout-modal textarea {
        width: 100%;
        height: 15rem;
        padding: 1rem;
        border-radius: 0.5rem;
        background: #111111;
        color: #fff;
        border: 1px solid #374151;
        resize: none;
    }
    .modal-actions {
        display: flex;
        justify-content: flex-end;
    }
    .modal-actions .checkout-button {
        width: auto;
        padding: 0.5rem 1.5rem;
    }
    @keyframes slide-in {
        from { transform: translateX(100%); }
        to { transform: translateX(0); }
    }
    @keyframes panel-in {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @media (max-width: 1024px) {
        .services-grid,
        .package-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
