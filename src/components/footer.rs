//! Page footer with copyright and placeholder nav links.

use leptos::prelude::*;

fn current_year() -> String {
    #[cfg(feature = "csr")]
    {
        format!("{}", js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        "2026".to_owned()
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <span class="footer__copyright">
                    "Copyright © " {current_year()} ", made for a better web."
                </span>
                <nav class="footer__nav">
                    <a href="#" class="footer__link">"About Us"</a>
                    <a href="#" class="footer__link">"Blog"</a>
                    <a href="#" class="footer__link">"License"</a>
                </nav>
            </div>
        </footer>
    }
}
