//! Display strings for the worksheet app, one tree per language.
//!
//! Keys are grouped by screen (`nav`, `home`, `scan`, `review`, `manual`,
//! `set`, `result`) plus `common` for shared labels. Both trees must keep the
//! same shape; `TreeValidator` checks that in tests.
//!
//! Placeholders use `{name}` and are filled in by the resolver.

use crate::i18n::tree::Node::{Branch, Leaf};
use crate::i18n::TranslationTree;

// ==================== Polish ====================

/// Polish display strings (default and fallback language).
pub static POLISH_TREE: TranslationTree = TranslationTree::new(&[
    (
        "nav",
        Branch(&[
            ("home", Leaf("Keyword Transformations")),
            ("scan", Leaf("Zeskanuj zadania")),
            ("manual", Leaf("Utwórz zestaw")),
        ]),
    ),
    (
        "home",
        Branch(&[
            ("title", Leaf("Zamień kartkę z ćwiczeniami w interaktywny test")),
            ("subtitle", Leaf("Wgraj zdjęcie lub PDF kartki, a system automatycznie wykryje transformacje słów kluczowych. Popraw wynik i udostępnij link.")),
            ("scanTitle", Leaf("Zeskanuj zadania")),
            ("scanDesc", Leaf("Wgraj zdjęcie lub PDF — OCR wykryje pytania automatycznie.")),
            ("manualTitle", Leaf("Utwórz ręcznie")),
            ("manualDesc", Leaf("Twórz transformacje słów kluczowych krok po kroku bez skanowania.")),
            ("step1", Leaf("Wgraj")),
            ("step1desc", Leaf("Zrób zdjęcie lub wgraj PDF z arkuszem ćwiczeń.")),
            ("step2", Leaf("Sprawdź")),
            ("step2desc", Leaf("Popraw automatycznie wykryte pytania i uzupełnij odpowiedzi.")),
            ("step3", Leaf("Udostępnij")),
            ("step3desc", Leaf("Opublikuj i wyślij link — każdy może rozwiązać test w przeglądarce.")),
        ]),
    ),
    (
        "scan",
        Branch(&[
            ("title", Leaf("Zeskanuj kartkę")),
            ("subtitle", Leaf("Obsługiwane formaty: JPEG, PNG, WEBP, PDF — maks. 20 MB")),
            ("dropHint", Leaf("Przeciągnij plik tutaj")),
            ("or", Leaf("lub")),
            ("browse", Leaf("Wybierz plik")),
            ("process", Leaf("Wykryj pytania")),
            ("processing", Leaf("Przetwarzanie… (OCR może potrwać do 30 s)")),
            ("errorType", Leaf("Nieobsługiwany format. Użyj JPEG, PNG, WEBP lub PDF.")),
            ("errorSize", Leaf("Plik jest za duży. Maksymalny rozmiar to 20 MB.")),
            ("removeFile", Leaf("Usuń plik")),
        ]),
    ),
    (
        "review",
        Branch(&[
            ("title", Leaf("Sprawdź pytania")),
            ("subtitle", Leaf("{n} pytań wykrytych — popraw błędy i uzupełnij poprawne odpowiedzi.")),
            ("setTitle", Leaf("Tytuł zestawu")),
            ("setTitlePlaceholder", Leaf("np. Transformacje – Unit 5")),
            ("publish", Leaf("Opublikuj zestaw")),
            ("publishing", Leaf("Publikowanie…")),
            ("addQuestion", Leaf("Dodaj pytanie")),
            ("sentence1", Leaf("Zdanie oryginalne")),
            ("sentence1ph", Leaf("Wpisz pełne zdanie…")),
            ("sentence2", Leaf("Zdanie z luką (użyj ______ jako luki)")),
            ("sentence2ph", Leaf("np. It wasn't until Monday ______ the news.")),
            ("keyword", Leaf("Keyword")),
            ("keywordph", Leaf("np. UNTIL")),
            ("answer", Leaf("Poprawna odpowiedź")),
            ("answerph", Leaf("Wpisz frazę wypełniającą lukę…")),
            ("maxWords", Leaf("Maks. wyrazów")),
            ("errSentence1", Leaf("Zdanie oryginalne jest wymagane.")),
            ("errSentence2", Leaf("Zdanie z luką jest wymagane i musi zawierać ______.")),
            ("errKeyword", Leaf("Keyword jest wymagany.")),
            ("errAnswer", Leaf("Poprawna odpowiedź jest wymagana.")),
            ("questionNum", Leaf("Pytanie #{n}")),
        ]),
    ),
    (
        "manual",
        Branch(&[
            ("title", Leaf("Nowy zestaw — transformacje")),
            ("subtitle", Leaf("Utwórz zestaw ćwiczeń Key Word Transformation bez skanowania.")),
            ("setTitle", Leaf("Tytuł zestawu")),
            ("setTitlePlaceholder", Leaf("np. FCE Transformacje – Czas przeszły")),
            ("publish", Leaf("Opublikuj zestaw")),
            ("publishing", Leaf("Publikowanie…")),
            ("addQuestion", Leaf("Dodaj transformację")),
            ("empty", Leaf("Brak pytań. Kliknij „Dodaj transformację\" poniżej.")),
        ]),
    ),
    (
        "set",
        Branch(&[
            ("questions", Leaf("{n} pytań")),
            ("submit", Leaf("Sprawdź odpowiedzi")),
            ("submitting", Leaf("Sprawdzanie…")),
            ("unanswered", Leaf("Pozostało bez odpowiedzi: {n}")),
            ("keyword", Leaf("Keyword:")),
            ("maxWords", Leaf("Maks. {n} wyrazów")),
            ("gapPlaceholder", Leaf("wpisz odpowiedź…")),
            ("sentence2label", Leaf("Uzupełnij:")),
        ]),
    ),
    (
        "result",
        Branch(&[
            ("title", Leaf("Wyniki — {title}")),
            ("breakdown", Leaf("Szczegóły odpowiedzi")),
            ("back", Leaf("Powrót do strony głównej")),
            ("perfect", Leaf("Idealny wynik!")),
            ("great", Leaf("Świetnie!")),
            ("good", Leaf("Niezły wynik — ćwicz dalej!")),
            ("poor", Leaf("Nie poddawaj się — ucz się dalej!")),
            ("yourAnswer", Leaf("Twoja odpowiedź:")),
            ("correct", Leaf("Poprawna:")),
            ("noAnswer", Leaf("(brak odpowiedzi)")),
        ]),
    ),
    (
        "common",
        Branch(&[
            ("remove", Leaf("Usuń")),
            ("words3", Leaf("3 wyrazy")),
            ("words4", Leaf("4 wyrazy")),
            ("words5", Leaf("5 wyrazów")),
            ("langToggle", Leaf("EN")),
        ]),
    ),
]);

// ==================== English ====================

/// English display strings.
pub static ENGLISH_TREE: TranslationTree = TranslationTree::new(&[
    (
        "nav",
        Branch(&[
            ("home", Leaf("Keyword Transformations")),
            ("scan", Leaf("Scan worksheet")),
            ("manual", Leaf("Create set")),
        ]),
    ),
    (
        "home",
        Branch(&[
            ("title", Leaf("Turn a paper worksheet into an interactive test")),
            ("subtitle", Leaf("Upload a photo or PDF of your worksheet and the app auto-detects key word transformation exercises. Review, publish, share.")),
            ("scanTitle", Leaf("Scan worksheet")),
            ("scanDesc", Leaf("Upload a photo or PDF — OCR detects questions automatically.")),
            ("manualTitle", Leaf("Create manually")),
            ("manualDesc", Leaf("Build key word transformation exercises step by step, no scanning needed.")),
            ("step1", Leaf("Upload")),
            ("step1desc", Leaf("Take a photo or upload a PDF of your exercise sheet.")),
            ("step2", Leaf("Review")),
            ("step2desc", Leaf("Correct auto-detected questions and fill in the correct answers.")),
            ("step3", Leaf("Share")),
            ("step3desc", Leaf("Publish and send the link — anyone can take the test in their browser.")),
        ]),
    ),
    (
        "scan",
        Branch(&[
            ("title", Leaf("Scan worksheet")),
            ("subtitle", Leaf("Supported formats: JPEG, PNG, WEBP, PDF — max 20 MB")),
            ("dropHint", Leaf("Drag & drop your file here")),
            ("or", Leaf("or")),
            ("browse", Leaf("Browse files")),
            ("process", Leaf("Detect questions")),
            ("processing", Leaf("Processing… (OCR can take up to 30 s)")),
            ("errorType", Leaf("Unsupported file type. Use JPEG, PNG, WEBP, or PDF.")),
            ("errorSize", Leaf("File too large. Maximum size is 20 MB.")),
            ("removeFile", Leaf("Remove file")),
        ]),
    ),
    (
        "review",
        Branch(&[
            ("title", Leaf("Review questions")),
            ("subtitle", Leaf("{n} questions detected — fix any mistakes and fill in correct answers.")),
            ("setTitle", Leaf("Set title")),
            ("setTitlePlaceholder", Leaf("e.g. Unit 5 Key Word Transformations")),
            ("publish", Leaf("Publish set")),
            ("publishing", Leaf("Publishing…")),
            ("addQuestion", Leaf("Add question")),
            ("sentence1", Leaf("Original sentence")),
            ("sentence1ph", Leaf("Type the full original sentence…")),
            ("sentence2", Leaf("Gapped sentence (use ______ for the gap)")),
            ("sentence2ph", Leaf("e.g. It wasn't until Monday ______ the news.")),
            ("keyword", Leaf("Keyword")),
            ("keywordph", Leaf("e.g. UNTIL")),
            ("answer", Leaf("Correct answer")),
            ("answerph", Leaf("Type the phrase that fills the gap…")),
            ("maxWords", Leaf("Max words")),
            ("errSentence1", Leaf("Original sentence is required.")),
            ("errSentence2", Leaf("Gapped sentence is required and must contain ______.")),
            ("errKeyword", Leaf("Keyword is required.")),
            ("errAnswer", Leaf("Correct answer is required.")),
            ("questionNum", Leaf("Question #{n}")),
        ]),
    ),
    (
        "manual",
        Branch(&[
            ("title", Leaf("New set — transformations")),
            ("subtitle", Leaf("Create a Key Word Transformation set without scanning.")),
            ("setTitle", Leaf("Set title")),
            ("setTitlePlaceholder", Leaf("e.g. FCE Transformations – Past Tenses")),
            ("publish", Leaf("Publish set")),
            ("publishing", Leaf("Publishing…")),
            ("addQuestion", Leaf("Add transformation")),
            ("empty", Leaf("No questions yet. Click \"Add transformation\" below.")),
        ]),
    ),
    (
        "set",
        Branch(&[
            ("questions", Leaf("{n} questions")),
            ("submit", Leaf("Submit answers")),
            ("submitting", Leaf("Checking…")),
            ("unanswered", Leaf("Unanswered: {n}")),
            ("keyword", Leaf("Keyword:")),
            ("maxWords", Leaf("Max {n} words")),
            ("gapPlaceholder", Leaf("type your answer…")),
            ("sentence2label", Leaf("Complete:")),
        ]),
    ),
    (
        "result",
        Branch(&[
            ("title", Leaf("Results — {title}")),
            ("breakdown", Leaf("Answer breakdown")),
            ("back", Leaf("Back to home")),
            ("perfect", Leaf("Perfect score!")),
            ("great", Leaf("Great work!")),
            ("good", Leaf("Good effort — keep practising!")),
            ("poor", Leaf("Keep going — review the material!")),
            ("yourAnswer", Leaf("Your answer:")),
            ("correct", Leaf("Correct:")),
            ("noAnswer", Leaf("(no answer)")),
        ]),
    ),
    (
        "common",
        Branch(&[
            ("remove", Leaf("Remove")),
            ("words3", Leaf("3 words")),
            ("words4", Leaf("4 words")),
            ("words5", Leaf("5 words")),
            ("langToggle", Leaf("PL")),
        ]),
    ),
]);
