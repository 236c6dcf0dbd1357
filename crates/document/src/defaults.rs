//! Built-in starter content used when neither a share token nor stored text
//! supplies a document.

use crate::DocumentKey;

pub const HTML: &str = r#"<h1>Heading</h1>
<p>This is a paragraph.</p>

<div class="block">Text in a div</div>
<div class="block2">- and another.</div>
"#;

pub const CSS: &str = r#":root {
  background-color: rgb(61, 59, 59);
  color: whitesmoke;
}

.block, .block2 {
  display: inline;
}
.block {
  color: red;
}
.block2 {
  color: skyblue;
}
"#;

pub const JS: &str = r#"// write a comment to describe a function
// then let the vibe coding gods take the wheel i guess

console.log("stck. init");
// check the dev console with F12
"#;

/// Built-in default text for `key`.
pub const fn text(key: DocumentKey) -> &'static str {
	match key {
		DocumentKey::Html => HTML,
		DocumentKey::Css => CSS,
		DocumentKey::Js => JS,
	}
}
