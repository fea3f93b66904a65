//! Injects the console bridge into a preview document

/// Runs first inside the preview. Clears the host transcript, forwards
/// console calls and uncaught errors to the parent window, then defers to
/// the original console.
pub const PROLOGUE: &str = r#"<script>
(function () {
  var parent = window.parent;
  if (!parent) { return; }
  parent.postMessage({ command: 'clear' }, '*');

  var toWire = function (arg) {
    try {
      if (arg instanceof Error) { return arg.toString(); }
      if (typeof arg === 'object' && arg !== null) {
        var seen = new Set();
        return JSON.parse(JSON.stringify(arg, function (key, value) {
          if (typeof value === 'object' && value !== null) {
            if (seen.has(value)) { return '[Circular]'; }
            seen.add(value);
          }
          return value;
        }));
      }
      return arg;
    } catch (e) {
      return 'Unserializable Object';
    }
  };

  var post = function (type, args) {
    parent.postMessage({
      type: type,
      message: args.map(toWire),
      timestamp: new Date().toLocaleTimeString()
    }, '*');
  };

  ['log', 'error', 'warn', 'info'].forEach(function (type) {
    var original = window.console[type].bind(window.console);
    window.console[type] = function () {
      var args = Array.prototype.slice.call(arguments);
      post(type, args);
      original.apply(null, args);
    };
  });

  window.addEventListener('error', function (e) {
    post('error', [e.message, 'at', e.filename + ':' + e.lineno]);
  });
})();
</script>"#;

const HEAD_CLOSE: &str = "</head>";

/// Insert [`PROLOGUE`] before the first `</head>`, or at the very start when
/// the document has no head
pub fn instrument(document: &str) -> String {
    let mut out = String::with_capacity(document.len() + PROLOGUE.len());
    match document.find(HEAD_CLOSE) {
        Some(at) => {
            out.push_str(&document[..at]);
            out.push_str(PROLOGUE);
            out.push_str(&document[at..]);
        }
        None => {
            out.push_str(PROLOGUE);
            out.push_str(document);
        }
    }
    out
}
