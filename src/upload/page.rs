use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_TEXT_INPUT_STYLE, base, loading_spinner},
    navigation::NavBar,
};

fn upload_form_view() -> Markup {
    let upload_route = endpoints::UPLOAD;
    let spinner = loading_spinner();

    html! {
        form
            hx-post=(upload_route)
            enctype="multipart/form-data"
            hx-disabled-elt="#file, #submit-button"
            hx-indicator="#indicator"
            hx-swap="none"
            hx-target-error="#alert-container"
            class="space-y-4 md:space-y-6"
        {
            div
            {
                label
                    for="file"
                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                {
                    "Choose a bank statement to upload"
                }

                input
                    id="file"
                    type="file"
                    name="file"
                    accept=".pdf,.csv,.xlsx"
                    placeholder="file"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);

                p
                {
                    "Upload a PDF, CSV, or XLSX statement exported from your
                    bank to automatically categorize your transactions."
                }
            }

            button
                type="submit"
                id="submit-button"
                class=(BUTTON_PRIMARY_STYLE)
            {
                span class="inline htmx-indicator" id="indicator" { (spinner) }
                " Upload Statement"
            }
        }
    }
}

fn upload_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::UPLOAD_VIEW).into_html();
    let form = upload_form_view();

    let content = html! {
        (nav_bar)

        div
            class="flex flex-col items-center px-6 py-8 mx-auto lg:py-0
            text-gray-900 dark:text-white"
        {
            div class="relative"
            {
                (form)
            }
        }
    };

    base("Upload Statement", &[], &content)
}

/// Route handler for the statement upload page.
pub async fn get_upload_page() -> Response {
    upload_view().into_response()
}
