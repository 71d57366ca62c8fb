//! Preview panel header: title plus image download buttons

use leptos::prelude::*;

#[component]
pub fn PreviewHeader(
    #[prop(default = "Live Preview")] title: &'static str,
    #[prop(into)] on_download_png: Callback<()>,
    #[prop(into)] on_download_svg: Callback<()>,
    /// Appended to the button captions, e.g. to mark a locked-highlight state
    #[prop(optional, into)]
    button_suffix: Option<String>,
) -> impl IntoView {
    let suffix = button_suffix.unwrap_or_default();
    let png_caption = format!(".PNG{suffix}");
    let svg_caption = format!(".SVG{suffix}");

    view! {
        <div class="preview-header">
            <h3 class="preview-title">{title}</h3>
            <div class="preview-actions">
                <button class="download-btn" on:click=move |_| on_download_png.run(())>
                    {png_caption}
                </button>
                <button class="download-btn" on:click=move |_| on_download_svg.run(())>
                    {svg_caption}
                </button>
            </div>
        </div>
    }
}
