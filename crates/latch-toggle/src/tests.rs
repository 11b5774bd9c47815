#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use latch_core::*;
    use latch_ui::{Button, Column, Switch, Text, click_by_id};

    use crate::*;

    fn compound_app() -> View {
        Column(Toggle(vec![
            ToggleOn(Text("The button is on")),
            ToggleOff(Text("The button is off")),
            Text("Hello").into(),
            ToggleButton(),
        ]))
    }

    #[test]
    fn compound_children_follow_shared_state() {
        let mut scheduler = Scheduler::new();
        let view = scheduler.compose(compound_app);
        assert_eq!(
            view.outline(),
            "Column\n  Text \"The button is off\"\n  Text \"Hello\"\n  \
             Switch(off) aria-pressed=false onClick"
        );

        let switch = view
            .find(&|v| matches!(v.kind, ViewKind::Switch { .. }))
            .unwrap();
        switch.click().unwrap();
        assert!(scheduler.take_invalidated());

        let view = scheduler.compose(compound_app);
        assert_eq!(view.texts(), vec!["The button is on", "Hello"]);
        assert_eq!(
            view.find(&|v| v.kind == ViewKind::Switch { checked: true })
                .and_then(|v| v.semantics.as_ref())
                .and_then(|s| s.pressed),
            Some(true)
        );
    }

    /// Two toggles controlled by the same parent value, with a click budget.
    fn control_props_app() -> View {
        let both_on = remember_signal(|| false);
        let times_clicked = remember_signal(|| 0u32);

        let config = ToggleConfig::new()
            .controlled(Some(both_on.get()))
            .on_change({
                let both_on = both_on.clone();
                let times_clicked = times_clicked.clone();
                move |state, action| {
                    if *action == ToggleAction::Toggle && times_clicked.get() > 4 {
                        return;
                    }
                    both_on.set(state.on);
                    times_clicked.update(|c| *c += 1);
                }
            });
        let first = use_toggle(config.clone());
        let second = use_toggle(config);

        let status = if times_clicked.get() > 4 {
            Text("Whoa, you clicked too much!")
        } else {
            Text(format!("Click count: {}", times_clicked.get()))
        };

        Column((
            Switch(first.on(), first.toggler_props(PropBundle::new().with("id", "first"))),
            Switch(second.on(), second.toggler_props(PropBundle::new().with("id", "second"))),
            status,
            Button(
                "Reset",
                PropBundle::new().with("id", "reset").on_click(move || {
                    both_on.set(false);
                    times_clicked.set(0);
                }),
            ),
        ))
    }

    fn switches(view: &View) -> Vec<bool> {
        let mut out = Vec::new();
        view.visit(&mut |v| {
            if let ViewKind::Switch { checked } = v.kind {
                out.push(checked);
            }
        });
        out
    }

    #[test]
    fn controlled_toggles_share_parent_value() {
        let mut scheduler = Scheduler::new();
        let mut view = scheduler.compose(control_props_app);
        assert_eq!(switches(&view), vec![false, false]);

        for (i, id) in ["first", "second", "first", "first", "second"].iter().enumerate() {
            assert!(click_by_id(&view, id).unwrap());
            assert!(scheduler.take_invalidated());
            view = scheduler.compose(control_props_app);
            let expected = i % 2 == 0;
            assert_eq!(switches(&view), vec![expected, expected]);
        }
        assert_eq!(view.texts(), vec!["Whoa, you clicked too much!"]);

        // over budget: the parent ignores the change, so nothing moves
        click_by_id(&view, "first").unwrap();
        assert!(!scheduler.take_invalidated());
        assert_eq!(switches(&view), vec![true, true]);

        click_by_id(&view, "reset").unwrap();
        assert!(scheduler.take_invalidated());
        let view = scheduler.compose(control_props_app);
        assert_eq!(switches(&view), vec![false, false]);
        assert_eq!(view.texts(), vec!["Click count: 0"]);
    }

    fn mode_frame(
        scheduler: &mut Scheduler,
        capture: &CapturingWarnings,
        on: Option<bool>,
    ) -> ToggleStateController {
        let sink: Rc<dyn WarningSink> = Rc::new(capture.clone());
        let out = Rc::new(RefCell::new(None));
        {
            let out = out.clone();
            scheduler.compose(move || {
                with_warning_sink(sink, || {
                    let config = ToggleConfig::new().controlled(on).on_change(|_, _| {});
                    let toggle = use_toggle(config);
                    *out.borrow_mut() = Some(toggle.clone());
                    Switch(toggle.on(), toggle.toggler_props(PropBundle::new()))
                })
            });
        }
        let toggle = out.borrow_mut().take();
        toggle.unwrap()
    }

    #[test]
    fn switching_modes_warns_once_per_transition() {
        let mut scheduler = Scheduler::new();
        let capture = CapturingWarnings::new();

        for on in [None, None, Some(true), Some(true), Some(false)] {
            mode_frame(&mut scheduler, &capture, on);
        }
        assert_eq!(capture.len(), 1);
        assert!(
            capture.warnings()[0]
                .to_string()
                .starts_with("`Toggle` is changing from uncontrolled to be controlled.")
        );

        for _ in 0..3 {
            mode_frame(&mut scheduler, &capture, None);
        }
        assert_eq!(capture.len(), 2);
    }

    #[test]
    fn read_only_controlled_toggle_warns_once_and_stays_put() {
        let mut scheduler = Scheduler::new();
        let capture = CapturingWarnings::new();
        let config = ToggleConfig::new()
            .controlled(Some(true))
            .warnings(Rc::new(capture.clone()));

        let mut view = View::empty();
        for _ in 0..3 {
            let config = config.clone();
            view = scheduler.compose(move || {
                let toggle = use_toggle(config);
                Switch(toggle.on(), toggle.toggler_props(PropBundle::new().with("id", "t")))
            });
        }
        assert_eq!(capture.len(), 1);
        assert!(capture.warnings()[0].to_string().contains("read-only `on` value"));

        click_by_id(&view, "t").unwrap();
        assert!(!scheduler.take_invalidated());
        assert_eq!(switches(&view), vec![true]);
    }

    #[test]
    fn prop_getter_chains_caller_click() {
        let mut scheduler = Scheduler::new();
        let custom_clicks = Rc::new(Cell::new(0));

        let app = |custom_clicks: Rc<Cell<u32>>| {
            move || {
                let toggle = use_toggle(ToggleConfig::new());
                let on = toggle.on();
                Column((
                    Switch(on, toggle.toggler_props(PropBundle::new())),
                    Button(
                        if on { "on" } else { "off" },
                        toggle.toggler_props(
                            PropBundle::new()
                                .with("aria-label", "custom-button")
                                .with("id", "custom-button-id")
                                .on_click(move || custom_clicks.set(custom_clicks.get() + 1)),
                        ),
                    ),
                ))
            }
        };

        let view = scheduler.compose(app(custom_clicks.clone()));
        click_by_id(&view, "custom-button-id").unwrap();
        assert_eq!(custom_clicks.get(), 1);
        assert!(scheduler.take_invalidated());

        let view = scheduler.compose(app(custom_clicks.clone()));
        assert_eq!(switches(&view), vec![true]);
        let button = view.find_by_prop("id", "custom-button-id").unwrap();
        assert_eq!(button.kind, ViewKind::Button { text: "on".into() });
        assert_eq!(button.props.text("aria-label"), Some("custom-button"));
        assert_eq!(button.semantics.as_ref().and_then(|s| s.pressed), Some(true));
    }

    #[test]
    fn initial_on_is_read_once() {
        let mut scheduler = Scheduler::new();
        let frame = |scheduler: &mut Scheduler, initial_on: bool| {
            let out = Rc::new(Cell::new(None));
            {
                let out = out.clone();
                scheduler.compose(move || {
                    let toggle = use_toggle(ToggleConfig::new().initial_on(initial_on));
                    out.set(Some(toggle.on()));
                    if initial_on {
                        View::empty()
                    } else {
                        // flip from the previous frame's value, then reset
                        toggle.toggle().unwrap();
                        toggle.reset().unwrap();
                        View::empty()
                    }
                });
            }
            out.get()
        };

        assert_eq!(frame(&mut scheduler, true), Some(true));
        assert_eq!(frame(&mut scheduler, false), Some(true));
        assert_eq!(frame(&mut scheduler, false), Some(true));
    }
}
