//! Headless walk-through of controlled and uncontrolled toggles.
//!
//! Two toggles share one parent-owned value and a click budget; a third
//! toggle manages itself. A profile form below shows optimistic updates.
//! Run with `RUST_LOG=debug` to see the runtime's own logging.

use std::rc::Rc;

use anyhow::{Context, bail};
use latch_core::prelude::*;
use latch_toggle::{ToggleAction, ToggleConfig, use_toggle};
use latch_ui::{Button, Column, Switch, Text, click_by_id};
use latch_user::{ScriptedUserClient, User, UserProvider, UserUpdates, update_user, use_user};

const MAX_CLICKS: u32 = 4;

fn app(client: Rc<ScriptedUserClient>) -> impl FnOnce() -> View {
    move || {
        let both_on = remember_signal(|| false);
        let times_clicked = remember_signal(|| 0u32);

        let shared = ToggleConfig::new()
            .controlled(Some(both_on.get()))
            .on_change({
                let both_on = both_on.clone();
                let times_clicked = times_clicked.clone();
                move |state, action| {
                    if *action == ToggleAction::Toggle && times_clicked.get() > MAX_CLICKS {
                        return;
                    }
                    both_on.set(state.on);
                    times_clicked.update(|c| *c += 1);
                }
            });
        let first = use_toggle(shared.clone());
        let second = use_toggle(shared);
        let free = use_toggle(ToggleConfig::new().on_change(|state, action| {
            log::info!("Uncontrolled Toggle on_change: {} -> {}", action.kind(), state.on)
        }));

        let notice = if times_clicked.get() > MAX_CLICKS {
            Text("Whoa, you clicked too much!")
        } else {
            Text(format!("Click count: {}", times_clicked.get()))
        };

        Column((
            Column((
                Switch(first.on(), first.toggler_props(PropBundle::new().with("id", "first"))),
                Switch(second.on(), second.toggler_props(PropBundle::new().with("id", "second"))),
            )),
            notice,
            Button(
                "Reset",
                PropBundle::new().with("id", "reset").on_click(move || {
                    both_on.set(false);
                    times_clicked.set(0);
                }),
            ),
            Column((
                Text("Uncontrolled Toggle:"),
                Switch(free.on(), free.toggler_props(PropBundle::new().with("id", "free"))),
            )),
            profile(client),
        ))
    }
}

fn profile(client: Rc<ScriptedUserClient>) -> View {
    UserProvider(User::new("kody"), || {
        let store = match use_user() {
            Ok(store) => store,
            Err(e) => return Text(e.to_string()),
        };
        let state = store.state();
        Column((
            Text(format!("{} says: {}", state.user.username, state.user.bio)),
            Button(
                "Save bio",
                PropBundle::new().with("id", "save").on_click(move || {
                    let updates = UserUpdates {
                        bio: Some("likes toggles".into()),
                        ..UserUpdates::default()
                    };
                    update_user(&store, &*client, updates);
                }),
            ),
        ))
    })
}

fn click(
    scheduler: &mut Scheduler,
    client: &Rc<ScriptedUserClient>,
    view: View,
    id: &str,
) -> anyhow::Result<View> {
    if !click_by_id(&view, id)? {
        bail!("nothing with id {id:?} on screen");
    }
    let mut view = view;
    while scheduler.take_invalidated() {
        view = scheduler.compose(app(client.clone()));
    }
    log::info!("after clicking {id}:\n{}", view.outline());
    Ok(view)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let client = Rc::new(ScriptedUserClient::new());
    let mut scheduler = Scheduler::new();
    let mut view = scheduler.compose(app(client.clone()));
    log::info!("initial:\n{}", view.outline());

    for id in ["first", "second", "first", "first", "second", "first"] {
        view = click(&mut scheduler, &client, view, id)?;
    }
    view = click(&mut scheduler, &client, view, "reset")?;
    view = click(&mut scheduler, &client, view, "free")?;
    view = click(&mut scheduler, &client, view, "save")?;

    let saved = client
        .succeed_next()
        .context("the save request should be pending")?;
    log::info!("server accepted bio {:?}", saved.bio);
    if scheduler.take_invalidated() {
        view = scheduler.compose(app(client.clone()));
    }
    println!("{}", view.outline());

    scheduler.dispose();
    Ok(())
}
