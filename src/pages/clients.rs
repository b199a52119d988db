//! Client management: searchable directory, detail panes, update sender.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

use leptos::prelude::*;

use crate::state::clients::{Client, ContactChannel, filter_clients, seed_clients};
use crate::util::content_index::{ContentIndex, IndexEntry};
use crate::util::format::format_currency;

/// Confirmation line after a client update is sent. Returns an error
/// message for an empty update instead of issuing anything.
fn send_update_status(client: &Client, channel: ContactChannel, message: &str) -> Result<String, String> {
    if message.trim().is_empty() {
        return Err("Type a message before sending.".to_owned());
    }
    Ok(format!("{} update sent to {}.", channel.label(), client.name))
}

fn index_entries(clients: &[Client]) -> Vec<IndexEntry> {
    clients
        .iter()
        .map(|client| {
            IndexEntry::new(
                format!("clients-{}", client.id),
                format!("{} {} {}", client.name, client.email, client.company),
                Some("Client List"),
            )
        })
        .collect()
}

/// Clients page.
#[component]
pub fn ClientsPage() -> impl IntoView {
    let clients = StoredValue::new(seed_clients());
    let search = RwSignal::new(String::new());
    let selected_id = RwSignal::new(clients.with_value(|c| c.first().map(|client| client.id)));
    let message = RwSignal::new(String::new());
    let channel = RwSignal::new(ContactChannel::Email);
    let send_status = RwSignal::new(None::<Result<String, String>>);

    let index = expect_context::<RwSignal<ContentIndex>>();
    Effect::new(move || {
        index.update(|i| {
            for entry in clients.with_value(|c| index_entries(c)) {
                i.register(entry);
            }
        });
    });
    on_cleanup(move || index.update(|i| i.unregister_prefix("clients-")));

    let filtered = Memo::new(move |_| clients.with_value(|c| filter_clients(c, &search.get())));
    let selected =
        Memo::new(move |_| {
            clients.with_value(|c| {
                selected_id.get().and_then(|id| c.iter().find(|client| client.id == id).cloned())
            })
        });

    let on_send = move |_| {
        let Some(client) = selected.get_untracked() else {
            return;
        };
        let outcome = send_update_status(&client, channel.get_untracked(), &message.get_untracked());
        if outcome.is_ok() {
            message.set(String::new());
        }
        send_status.set(Some(outcome));
    };

    view! {
        <div class="clients">
            <header class="clients__header">
                <div>
                    <h2>"Client Management"</h2>
                    <p>"Manage your client relationships and communications"</p>
                </div>
                <button class="btn btn--primary">"+ Add New Client"</button>
            </header>

            <div class="clients__columns">
                <section class="card clients__list" aria-label="Client List">
                    <h3>"Client List"</h3>
                    <input
                        class="clients__search"
                        type="text"
                        placeholder="Search clients..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    {move || {
                        filtered
                            .get()
                            .into_iter()
                            .map(|client| {
                                let id = client.id;
                                view! {
                                    <div
                                        class="client-card"
                                        class:client-card--selected=move || selected_id.get() == Some(id)
                                        id=format!("clients-{id}")
                                        on:click=move |_| {
                                            selected_id.set(Some(id));
                                            send_status.set(None);
                                        }
                                    >
                                        <span class="client-card__avatar">{client.avatar.clone()}</span>
                                        <div class="client-card__body">
                                            <div class="client-card__top">
                                                <span class="client-card__name">{client.name.clone()}</span>
                                                <span class=format!("badge {}", client.billing_status.badge_class())>
                                                    {client.billing_status.label()}
                                                </span>
                                            </div>
                                            <p class="client-card__company">{client.company.clone()}</p>
                                            <span class="client-card__meta">
                                                {format!("{} cases • {} documents", client.cases.len(), client.documents)}
                                            </span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=move || filtered.get().is_empty()>
                        <p class="clients__empty">"No clients match your search."</p>
                    </Show>
                </section>

                <section class="card clients__details" aria-label="Client Details">
                    <Show
                        when=move || selected.get().is_some()
                        fallback=|| view! { <p class="clients__placeholder">"Select a client to view details"</p> }
                    >
                        {move || {
                            selected.get().map(|client| view! { <ClientDetails client=client/> })
                        }}
                        <div class="clients__update">
                            <h4>"Send Client Update"</h4>
                            <div class="clients__update-row">
                                <select
                                    class="clients__update-channel"
                                    on:change=move |ev| {
                                        if let Some(parsed) = ContactChannel::from_label(&event_target_value(&ev)) {
                                            channel.set(parsed);
                                        }
                                    }
                                >
                                    {ContactChannel::ALL
                                        .into_iter()
                                        .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                                        .collect::<Vec<_>>()}
                                </select>
                                <input
                                    class="clients__update-message"
                                    type="text"
                                    placeholder="Type your message here..."
                                    prop:value=move || message.get()
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                />
                                <button class="btn btn--primary" on:click=on_send>
                                    "Send"
                                </button>
                            </div>
                            {move || {
                                send_status
                                    .get()
                                    .map(|outcome| match outcome {
                                        Ok(line) => view! { <p class="clients__update-ok">{line}</p> },
                                        Err(line) => view! { <p class="clients__update-error">{line}</p> },
                                    })
                            }}
                        </div>
                    </Show>
                </section>
            </div>
        </div>
    }
}

/// Detail panes for the selected client.
#[component]
fn ClientDetails(client: Client) -> impl IntoView {
    view! {
        <div class="client-details">
            <div class="client-details__identity">
                <span class="client-details__avatar">{client.avatar.clone()}</span>
                <div>
                    <h3>{client.name.clone()}</h3>
                    <p>{client.company.clone()}</p>
                </div>
            </div>

            <div class="client-details__grid">
                <div class="client-details__pane">
                    <h4>"Contact Information"</h4>
                    <p>{client.email.clone()}</p>
                    <p>{client.phone.clone()}</p>
                    <p>{format!("Prefers {}", client.preferred_contact.label())}</p>
                </div>

                <div class="client-details__pane">
                    <h4>"Case Information"</h4>
                    <ul>
                        {client
                            .cases
                            .iter()
                            .map(|case| view! { <li>{case.clone()}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div class="client-details__pane">
                    <h4>"Documents"</h4>
                    <p>{format!("{} documents", client.documents)}</p>
                    <button class="btn">"Upload New"</button>
                </div>

                <div class="client-details__pane">
                    <h4>"Billing Information"</h4>
                    <p>
                        "Status: "
                        <span class=format!("badge {}", client.billing_status.badge_class())>
                            {client.billing_status.label()}
                        </span>
                    </p>
                    <p>{format!("Total Billed: {}", format_currency(client.total_billed_cents))}</p>
                    <button class="btn">"View Invoice History"</button>
                </div>
            </div>
        </div>
    }
}
