use std::rc::Rc;

use leptos::prelude::*;
use portal::PortalController;

use crate::ui_model::{DemoAction, PortalRoute};

// Element ids below are the controller's DOM contract (`ElementId::dom_id`).
// The controller writes into them directly, so they carry no reactive content.

#[component]
pub(super) fn App(portal: Rc<PortalController>, route: PortalRoute) -> impl IntoView {
    let page = match route {
        PortalRoute::Portal => view! { <PortalPage portal=portal /> }.into_any(),
        PortalRoute::Profile => view! { <ProfilePage portal=portal /> }.into_any(),
    };

    view! {
        <main class="portal">
            <header class="app-header">
                <h1 class="brand">{route.title()}</h1>
                <div class="subtle">
                    "Current URL: "
                    <code id="currentUrl"></code>
                </div>
                <div id="bridgeStatus" class="bridge-status"></div>
            </header>
            {page}
            <OutputPanel />
        </main>
    }
}

#[component]
fn PortalPage(portal: Rc<PortalController>) -> impl IntoView {
    let portal = StoredValue::new_local(portal);

    let run = move |action: DemoAction| {
        portal.with_value(|p| match action {
            DemoAction::DeviceInfo => {
                p.get_device_info();
            }
            DemoAction::CopyToken => {
                p.copy_token();
            }
            DemoAction::LogEvent => {
                p.log_event();
            }
            DemoAction::Toast => {
                p.trigger_native_toast();
            }
            DemoAction::OpenUrl => {
                p.open_url_from_input();
            }
            DemoAction::SimulateCallback => {
                p.simulate_native_callback();
            }
        })
    };

    view! {
        <section class="card">
            <h2>"Native bridge"</h2>
            <div class="url-row">
                <input id="urlInput" type="url" placeholder="https://example.com" />
            </div>
            <div class="actions">
                {DemoAction::all()
                    .iter()
                    .map(|&action| {
                        view! {
                            <button class="btn" title=action.hint() on:click=move |_| run(action)>
                                {action.icon()}" "{action.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="card">
            <h2>"Login (demo)"</h2>
            <div class="login-form">
                <input id="email" type="email" placeholder="email" autocomplete="username" />
                <input
                    id="password"
                    type="password"
                    placeholder="password"
                    autocomplete="current-password"
                />
                <button
                    class="btn primary"
                    on:click=move |_| {
                        portal.with_value(|p| {
                            p.login();
                        })
                    }
                >
                    "Login"
                </button>
            </div>
        </section>
    }
}

#[component]
fn ProfilePage(portal: Rc<PortalController>) -> impl IntoView {
    let portal = StoredValue::new_local(portal);

    view! {
        <section class="card">
            <h2>"Session"</h2>
            <pre id="tokenBox" class="token-box"></pre>
            <div class="actions">
                <button
                    class="btn"
                    on:click=move |_| {
                        portal.with_value(|p| {
                            p.copy_token();
                        })
                    }
                >
                    "📋 Copy token"
                </button>
                <button class="btn ghost" on:click=move |_| portal.with_value(|p| p.logout())>
                    "Logout"
                </button>
            </div>
        </section>
    }
}

#[component]
fn OutputPanel() -> impl IntoView {
    view! {
        <section class="card">
            <h2>"Output"</h2>
            <pre id="output" class="output"></pre>
        </section>
    }
}
