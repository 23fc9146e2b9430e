use axum::{
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

pub fn create_static_router() -> Router {
    Router::new()
        .route("/static/css/main.css", get(serve_main_css))
        .route("/static/js/main.js", get(serve_main_js))
}

async fn serve_main_css() -> impl IntoResponse {
    let css = r#"
        body {
            margin: 0;
            display: flex;
            font-family: system-ui, sans-serif;
            background: #fafafa;
        }
        .sidebar {
            width: 220px;
            min-height: 100vh;
            padding: 1rem;
            background: #f0f2f6;
        }
        .sidebar ul { list-style: none; padding: 0; }
        .sidebar a { display: block; padding: 0.4rem 0.6rem; border-radius: 6px; color: #262730; text-decoration: none; }
        .sidebar a.active { background: #ff4b4b; color: white; }
        main { flex: 1; padding: 1rem 2rem; max-width: 1100px; }
        label { display: block; margin-top: 0.75rem; font-weight: 600; }
        select, input[type=text], textarea { width: 100%; box-sizing: border-box; margin-bottom: 1rem; }
        textarea { font-family: monospace; }
        .picker { display: grid; gap: 0.5rem; }
        .tabs { display: flex; gap: 0.5rem; margin-bottom: 1rem; border-bottom: 1px solid #e0e0e0; }
        .tab { padding: 0.5rem 1rem; text-decoration: none; color: #262730; }
        .tab.active { border-bottom: 2px solid #ff4b4b; }
        .template-card {
            border: 1px solid #e0e0e0;
            border-radius: 10px;
            padding: 1rem;
            margin: 1rem 0;
            background: white;
        }
        .preview {
            width: 100%;
            border: 1px solid #e0e0e0;
            border-radius: 5px;
        }
        .source { counter-reset: line; overflow-x: auto; background: #f6f8fa; padding: 0.5rem; }
        .source .line { display: block; }
        .source .line::before {
            counter-increment: line;
            content: counter(line);
            display: inline-block;
            width: 3em;
            margin-right: 1em;
            color: #999;
            text-align: right;
        }
        .actions { display: flex; gap: 0.5rem; }
        button.primary { background: #ff4b4b; color: white; border: none; padding: 0.5rem 1rem; border-radius: 6px; }
        .flash { padding: 0.75rem 1rem; border-radius: 6px; margin: 1rem 0; }
        .flash.success { background: #dff5e3; }
        .flash.info { background: #e1effe; }
        .flash.error { background: #fde2e2; }
    "#;

    ([(header::CONTENT_TYPE, "text/css")], css)
}

async fn serve_main_js() -> impl IntoResponse {
    let js = r#"
        // Re-render the page as soon as a picker changes
        document.addEventListener('DOMContentLoaded', () => {
            document.querySelectorAll('select.auto-submit').forEach(select => {
                if (!select.form || select.form.method !== 'get') {
                    return;
                }
                select.addEventListener('change', () => {
                    // A new category invalidates the selected template
                    if (select.name === 'category') {
                        const template = select.form.querySelector('select[name=template]');
                        if (template) {
                            template.disabled = true;
                        }
                    }
                    select.form.submit();
                });
            });
        });
    "#;

    ([(header::CONTENT_TYPE, "application/javascript")], js)
}
