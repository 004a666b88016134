/*! Spell-checking and document-consistency correction.

Implements spell-checking with edit-distance suggestion search against a
word list, detection of inconsistent spelling variants of the same word
within one document, and context-aware suppression of corrections for
tokens that read as proper names.

# Usage examples

```
use std::sync::Arc;

use consispell::checker::TextChecker;
use consispell::lexicon::Lexicon;

let lexicon = Arc::new(Lexicon::from_words(
    ["hello", "world", "receive"],
    ["telangana"],
));
let checker = TextChecker::new(lexicon);

for record in checker.check("helo wrld") {
    println!("{}: {:?}", record.surface, record.correction);
}
```

Further examples of how to use the consispell library can be found in
[`consispell-bin`] in the same repository.

[`consispell-bin`]: (https://github.com/divvun/consispell)

*/

#![warn(missing_docs)]
pub mod checker;
pub mod cluster;
pub mod context;
pub mod lexicon;
pub mod speller;
pub mod tokenizer;

pub(crate) mod constants;
pub(crate) mod types;
