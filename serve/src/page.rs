//! `GET /`: the single page (objective textarea, trigger button, status, copyable output).
//!
//! The page calls `POST /api/generate` and renders the JSON result. When generation is
//! disabled at startup the error banner is rendered server-side and the button is disabled.

use std::sync::Arc;

use axum::{extract::State, response::Html};

use super::app::AppState;

const PLACEHOLDER: &str = "Ex: Quero um prompt para analisar o fluxo de carga em minha rede de 13.8 kV com 55 barras, com o objetivo de reduzir as perdas elétricas.";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #222; }
textarea { width: 100%; height: 150px; font: inherit; padding: .5rem; box-sizing: border-box; }
button { width: 100%; padding: .7rem; margin-top: .5rem; font: inherit; cursor: pointer; }
button:disabled { cursor: not-allowed; opacity: .5; }
.msg { padding: .6rem .8rem; border-radius: 6px; margin: .8rem 0; }
.msg.error { background: #fde8e8; color: #8a1c1c; }
.msg.warning { background: #fff4d6; color: #7a5600; }
.msg.info { background: #e6f0ff; color: #1c3f8a; }
.msg.success { background: #e4f7e7; color: #1d6b2c; }
pre { white-space: pre-wrap; overflow-wrap: break-word; word-wrap: break-word; background: #f6f8fa; padding: 1rem; border-radius: 6px; }
#copy { width: auto; padding: .3rem .8rem; }
"#;

const SCRIPT: &str = r#"
const button = document.getElementById('generate');
const status = document.getElementById('status');
const output = document.getElementById('output');
const result = document.getElementById('result');

function show(kind, text) {
  const div = document.createElement('div');
  div.className = 'msg ' + kind;
  div.textContent = text;
  status.appendChild(div);
}

button.addEventListener('click', async () => {
  status.replaceChildren();
  output.hidden = true;
  const text = document.getElementById('objective').value;
  if (!text.trim()) { show('warning', 'Por favor, descreva o objetivo do seu prompt.'); return; }
  button.disabled = true;
  show('info', 'Analisando seu objetivo e elaborando o prompt... Por favor, aguarde.');
  try {
    const resp = await fetch('/api/generate', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ text }),
    });
    const body = await resp.json();
    status.replaceChildren();
    if (resp.ok) {
      show('info', 'Tópico identificado: ' + body.topic.label);
      show('success', 'Prompt otimizado gerado pela IA com sucesso!');
      result.textContent = body.prompt;
      output.hidden = false;
    } else {
      show(body.kind === 'empty_input' ? 'warning' : 'error', body.error);
    }
  } catch (e) {
    status.replaceChildren();
    show('error', 'ERRO: ' + e);
  } finally {
    button.disabled = false;
  }
});

document.getElementById('copy').addEventListener('click', () => {
  navigator.clipboard.writeText(result.textContent);
});
"#;

/// Renders the page. `startup_error`, when set, disables the button.
pub(crate) fn render_page(startup_error: Option<&str>) -> String {
    let (banner, disabled) = match startup_error {
        Some(e) => (
            format!(r#"<div class="msg error">{}</div>"#, html_escape::encode_text(e)),
            " disabled",
        ),
        None => (String::new(), ""),
    };
    // Script is omitted when disabled: nothing on the page can trigger generation.
    let script = if startup_error.is_some() {
        String::new()
    } else {
        format!("<script>{}</script>", SCRIPT)
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>IA Engenheira de Prompts</title>
<style>{STYLE}</style>
</head>
<body>
<h1>⚡️ IA Engenheira de Prompts Elétricos</h1>
{banner}
<p>Descreva o <strong>objetivo</strong> do prompt que você quer criar. A IA irá gerar um prompt completo e otimizado para você usar em outras plataformas (ChatGPT, Claude, Gemini, etc.).</p>
<label for="objective">📝 <strong>Descreva o objetivo do prompt que você quer criar:</strong></label>
<textarea id="objective" placeholder="{placeholder}"></textarea>
<button id="generate"{disabled}>✨ Gerar Prompt Otimizado pela IA</button>
<div id="status"></div>
<div id="output" hidden>
<button id="copy" type="button">Copiar</button>
<pre id="result"></pre>
</div>
<hr>
<small>Copie o prompt gerado e use-o em sua plataforma de IA preferida para obter sua análise técnica.</small>
{script}
</body>
</html>
"#,
        placeholder = html_escape::encode_double_quoted_attribute(PLACEHOLDER),
    )
}

pub(crate) async fn handle_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(state.startup_error.as_deref()))
}
