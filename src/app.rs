//! Widget gallery page composing every component.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gallery is the crate's only consumer-facing page: it installs the
//! toast and shortcut contexts, registers demo shortcuts, and lays out one
//! section per widget so each can be exercised in the browser.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_meta::{Title, provide_meta_context};

use crate::components::accordion::{Accordion, AccordionItem};
use crate::components::boundary::WidgetBoundary;
use crate::components::button::{ButtonSize, ButtonVariant, RippleButton};
use crate::components::context_menu::ContextMenu;
use crate::components::drawer::Drawer;
use crate::components::modal::Modal;
use crate::components::progress_ring::ProgressRing;
use crate::components::search_box::SearchBox;
use crate::components::shortcuts::{ShortcutHelp, Shortcuts, provide_shortcuts, use_global_shortcuts};
use crate::components::tilt_card::TiltCard;
use crate::components::toast::{ToastHost, Toaster, provide_toasts};
use crate::components::tooltip::Tooltip;
use crate::components::typewriter::{RevealText, TypewriterText};
use crate::components::virtual_list::VirtualList;
use crate::error::WidgetError;
use crate::state::menu::MenuItem;
use crate::state::overlay::{DrawerSide, DrawerState};
use crate::state::search::filter_items;
use crate::state::toast::{NewToast, ToastKind};
use crate::state::tooltip::Placement;
use crate::util::theme::{self, Theme};

const SYMBOL_ROW_HEIGHT_PX: f64 = 32.0;
const SYMBOL_LIST_HEIGHT_PX: f64 = 320.0;

const BASES: &[&str] = &[
    "BTC", "ETH", "SOL", "ADA", "XRP", "DOT", "AVAX", "LINK", "MATIC", "ATOM", "LTC", "BCH", "UNI", "AAVE", "NEAR",
    "ARB", "OP", "APT", "SUI", "INJ", "AAPL", "MSFT", "NVDA", "TSLA", "AMZN", "GOOG", "META", "NFLX", "AMD", "INTC",
];
const QUOTES: &[&str] = &["USD", "USDT", "EUR", "GBP", "JPY", "BTC", "ETH"];

/// Every base/quote pair, as `BASE-QUOTE`.
fn demo_symbols() -> Vec<String> {
    BASES
        .iter()
        .flat_map(|base| QUOTES.iter().filter(move |quote| *quote != base).map(move |quote| format!("{base}-{quote}")))
        .collect()
}

/// Register the gallery's shortcuts, reporting conflicts as toasts.
fn register_demo_shortcuts(
    shortcuts: Shortcuts,
    toaster: Toaster,
    drawer: RwSignal<DrawerState>,
    modal_open: RwSignal<bool>,
    theme_pref: RwSignal<Theme>,
) {
    let bindings: [(&str, &str, &str, &str, Callback<()>); 5] = [
        ("ticket", "T", "Toggle order ticket", "Trading", Callback::new(move |()| drawer.update(DrawerState::toggle))),
        ("confirm", "M", "Open confirmation dialog", "Trading", Callback::new(move |()| modal_open.set(true))),
        (
            "celebrate",
            "C",
            "Celebrate a filled order",
            "Trading",
            Callback::new(move |()| {
                toaster.success("Order filled");
            }),
        ),
        (
            "theme",
            "Shift+D",
            "Cycle color theme",
            "View",
            Callback::new(move |()| theme_pref.update(|t| *t = theme::cycle(*t))),
        ),
        (
            "close",
            "Escape",
            "Close panels",
            "View",
            Callback::new(move |()| {
                drawer.update(DrawerState::close);
                modal_open.set(false);
            }),
        ),
    ];
    for (id, chord, description, group, handler) in bindings {
        if let Err(err) = shortcuts.register(id, chord, description, group, handler) {
            toaster.error(WidgetError::from(err).to_string());
        }
    }
}

/// Pretend lazy-loaded widget that always fails.
fn load_news_feed() -> Result<AnyView, WidgetError> {
    Err(WidgetError::LoadFailed("News feed".to_owned()))
}

/// Gallery root.
#[component]
pub fn WidgetGallery() -> impl IntoView {
    provide_meta_context();
    let toaster = provide_toasts();
    let shortcuts = provide_shortcuts();

    let theme_pref = RwSignal::new(theme::read_preference());
    theme::apply(theme_pref.get_untracked());

    let drawer = RwSignal::new(DrawerState::new(DrawerSide::Right));
    let modal_open = RwSignal::new(false);
    let placing_order = RwSignal::new(false);
    let fill_percent = RwSignal::new(40.0_f64);

    register_demo_shortcuts(shortcuts, toaster, drawer, modal_open, theme_pref);
    use_global_shortcuts(shortcuts);

    let symbols = StoredValue::new(demo_symbols());
    let symbol_query = RwSignal::new(String::new());
    let jump_to = RwSignal::new(None::<usize>);
    let filtered = Memo::new(move |_| {
        let query = symbol_query.get();
        symbols.with_value(|all| {
            filter_items(all, &query, all.len()).into_iter().map(|i| all[i].clone()).collect::<Vec<_>>()
        })
    });

    let on_place_order = Callback::new(move |_: leptos::ev::MouseEvent| {
        placing_order.set(true);
        crate::util::timers::after(1_200, move || {
            placing_order.try_set(false);
            toaster.show(NewToast::new(ToastKind::Success, "Limit order placed").title("BTC-USD"));
        });
    });

    let faq = vec![
        AccordionItem::new("fees", "How are fees calculated?", || {
            view! { <p>"Maker and taker fees depend on your 30-day volume tier."</p> }
        }),
        AccordionItem::new("limits", "What are the order limits?", || {
            view! { <p>"Each order must be between 10 USD and 1,000,000 USD notional."</p> }
        }),
        AccordionItem::new("alerts", "How do price alerts work?", || {
            view! { <p>"Alerts fire once when the last trade crosses your level."</p> }
        }),
    ];

    let menu_items = vec![
        MenuItem::new("buy", "Buy more").shortcut("B"),
        MenuItem::new("sell", "Sell").shortcut("S"),
        MenuItem::new("alert", "Set price alert"),
        MenuItem::separator(),
        MenuItem::new("export", "Export history").disabled(true),
        MenuItem::new("close", "Close position").danger(),
    ];
    let on_menu_select = Callback::new(move |id: String| {
        toaster.info(format!("Action: {id}"));
    });

    let symbol_row = Callback::new(move |(index, symbol): (usize, String)| {
        view! {
            <span class="symbol-row__index">{index + 1}</span>
            <span class="symbol-row__name">{symbol}</span>
        }
        .into_any()
    });

    view! {
        <Title text="Trading widgets" />
        <main class="gallery">
            <header class="gallery__header">
                <h1>
                    <TypewriterText phrases=vec![
                        "Trade smarter.".to_owned(),
                        "Spot the setup.".to_owned(),
                        "Size every position.".to_owned(),
                    ] />
                </h1>
                <RippleButton
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_| theme_pref.update(|t| *t = theme::cycle(*t)))
                >
                    {move || format!("Theme: {}", theme_pref.get().label())}
                </RippleButton>
                <RippleButton
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_| shortcuts.set_help_open(true))
                >
                    "Shortcuts (?)"
                </RippleButton>
            </header>

            <section class="gallery__section">
                <h2>"Buttons"</h2>
                <RippleButton loading=placing_order on_click=on_place_order>
                    "Place order"
                </RippleButton>
                <RippleButton variant=ButtonVariant::Secondary particles=true on_click=Callback::new(move |_| {
                    toaster.success("Position closed in profit");
                })>
                    "Take profit"
                </RippleButton>
                <RippleButton variant=ButtonVariant::Danger size=ButtonSize::Lg disabled=true>
                    "Trading halted"
                </RippleButton>
            </section>

            <section class="gallery__section">
                <h2>"Progress"</h2>
                <ProgressRing percent=fill_percent label="Order fill" />
                <ProgressRing percent=Signal::stored(0.0) indeterminate=true label="Loading" />
                <RippleButton size=ButtonSize::Sm on_click=Callback::new(move |_| fill_percent.update(|p| *p = (*p - 10.0).max(0.0)))>
                    "−10%"
                </RippleButton>
                <RippleButton size=ButtonSize::Sm on_click=Callback::new(move |_| fill_percent.update(|p| *p = (*p + 10.0).min(100.0)))>
                    "+10%"
                </RippleButton>
            </section>

            <section class="gallery__section">
                <h2>"FAQ"</h2>
                <Accordion items=faq allow_multiple=true storage_key="gallery_faq" />
            </section>

            <section class="gallery__section">
                <h2>"Overlays"</h2>
                <RippleButton on_click=Callback::new(move |_| modal_open.set(true))>"Confirm order"</RippleButton>
                <RippleButton variant=ButtonVariant::Secondary on_click=Callback::new(move |_| drawer.update(DrawerState::open))>
                    "Order ticket"
                </RippleButton>
                <Tooltip text="Fees are charged in the quote currency" placement=Placement::Right>
                    <span class="gallery__info" tabindex="0">"ⓘ"</span>
                </Tooltip>
            </section>

            <section class="gallery__section">
                <h2>"Positions"</h2>
                <ContextMenu items=menu_items on_select=on_menu_select>
                    <div class="position-row">
                        <span>"ETH-USD"</span>
                        <span>"2.5 @ 3,120.40"</span>
                        <span class="position-row__pnl">"+4.2%"</span>
                    </div>
                </ContextMenu>
            </section>

            <section class="gallery__section">
                <h2>"Symbols"</h2>
                <SearchBox
                    on_search=Callback::new(move |q: String| symbol_query.set(q))
                    placeholder="Search symbols"
                />
                <RippleButton
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_| {
                        let last = filtered.with_untracked(Vec::len).checked_sub(1);
                        jump_to.set(last);
                    })
                >
                    "Jump to last"
                </RippleButton>
                <VirtualList
                    items=filtered
                    item_height=SYMBOL_ROW_HEIGHT_PX
                    height=SYMBOL_LIST_HEIGHT_PX
                    row=symbol_row
                    scroll_to=jump_to
                />
            </section>

            <section class="gallery__section">
                <h2>"Market summary"</h2>
                <TiltCard class="market-card">
                    <h3>"BTC-USD"</h3>
                    <p class="market-card__price">"64,210.55"</p>
                </TiltCard>
                <RevealText text="Momentum is building above the weekly open while funding stays neutral." />
            </section>

            <section class="gallery__section">
                <h2>"News"</h2>
                <WidgetBoundary name="News feed">{load_news_feed}</WidgetBoundary>
            </section>
        </main>

        <Modal open=modal_open on_close=Callback::new(move |()| modal_open.set(false)) title="Confirm order">
            <p>"Buy 0.25 BTC at 64,200.00 USD?"</p>
            <label>"Note" <input type="text" placeholder="Optional" /></label>
            <div class="dialog__actions">
                <RippleButton variant=ButtonVariant::Ghost on_click=Callback::new(move |_| modal_open.set(false))>
                    "Cancel"
                </RippleButton>
                <RippleButton on_click=Callback::new(move |_| {
                    modal_open.set(false);
                    toaster.success("Order submitted");
                })>
                    "Confirm"
                </RippleButton>
            </div>
        </Modal>

        <Drawer
            open=Signal::derive(move || drawer.with(|d| d.open))
            on_close=Callback::new(move |()| drawer.update(DrawerState::close))
            side=DrawerSide::Right
            title="Order ticket"
        >
            <p>"Market · BTC-USD"</p>
            <label>"Size" <input type="number" value="0.25" /></label>
            <RippleButton on_click=Callback::new(move |_| {
                drawer.update(DrawerState::close);
                toaster.show(NewToast::new(ToastKind::Warning, "Ticket submitted without a stop loss").title("Risk"));
            })>
                "Submit"
            </RippleButton>
        </Drawer>

        <ShortcutHelp />
        <ToastHost />
    }
}
