use workflow::Page;
use yew::prelude::*;

use super::navbar::Navbar;
use crate::session::use_active_page;
use crate::ui::reveal_hook::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub page: Page,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    use_active_page(props.page);
    use_scroll_reveal(props.page);

    html! {
        <div class="min-h-screen bg-base-200 flex flex-col">
            <Navbar />
            <main class="flex-1 max-w-7xl w-full mx-auto py-6 px-4 sm:px-6 lg:px-8">
                { for props.children.iter() }
            </main>
        </div>
    }
}
