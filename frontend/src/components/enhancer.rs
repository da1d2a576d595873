use yew::prelude::*;

use crate::behaviors::{use_fade_in, use_form_submit, use_scroll_progress, use_smooth_scroll};
use crate::context::PageContext;
use crate::i18n::{open_store, use_language_switcher};

/// Attaches every landing page behaviour to the server-rendered markup.
///
/// Renders nothing itself; all work happens in the hooks' effects, which run
/// once after mount and detach their listeners on unmount.
#[function_component(Enhancer)]
pub fn enhancer() -> Html {
    let context = use_memo(|_| PageContext::new(open_store()), ());

    use_scroll_progress();
    use_language_switcher(context.clone());
    use_smooth_scroll();
    use_form_submit(context);
    use_fade_in();

    html! {}
}
