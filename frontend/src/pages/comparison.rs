use yew::prelude::*;

use crate::components::card::{BulletList, Card, Eyebrow};
use crate::content::{self, Fit};

const COMPARISON_CSS: &str = r#"
    .comparison-table {
        width: 100%;
        border-collapse: separate;
        border-spacing: 0;
        background: #fff;
        border: 2px solid var(--line);
        border-radius: var(--radius);
        overflow: hidden;
        box-shadow: var(--shadow);
    }
    .comparison-table th {
        padding: 14px 12px;
        border-bottom: 1px solid var(--line);
        background: rgba(140, 110, 255, 0.06);
        text-align: left;
        font-weight: 600;
    }
    .comparison-table th.ours { color: var(--violet); }
    .comparison-table td {
        padding: 14px 12px;
        border-bottom: 1px solid var(--line);
        vertical-align: top;
        color: var(--muted);
    }
    .comparison-table td.dimension { font-weight: 600; color: var(--ink); }
    .comparison-table tr:last-child td { border-bottom: none; }
    .table-scroll { overflow-x: auto; }
"#;

#[derive(Properties, PartialEq)]
pub struct ComparisonProps {
    pub comparison: content::Comparison,
    pub fit: Fit,
}

#[function_component(Comparison)]
pub fn comparison(props: &ComparisonProps) -> Html {
    let comparison = &props.comparison;
    html! {
        <>
            <section class="section" id="compare">
                <style>{COMPARISON_CSS}</style>
                <h2 class="card-title">{ &comparison.title }</h2>
                <div class="table-scroll">
                    <table class="comparison-table" aria-label={comparison.aria_label.clone()}>
                        <thead>
                            <tr>
                                { for comparison.headers.iter().enumerate().map(|(index, header)| html! {
                                    <th class={classes!((index == 1).then_some("ours"))}>{ header }</th>
                                }) }
                            </tr>
                        </thead>
                        <tbody>
                            { for comparison.rows.iter().map(|row| html! {
                                <tr>
                                    <td class="dimension">{ &row.dimension }</td>
                                    <td>{ &row.ours }</td>
                                    <td>{ &row.competitor }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </section>

            <section class="section grid-2" aria-label="Fit">
                <Card>
                    <Eyebrow text={AttrValue::from(props.fit.ours.eyebrow.clone())} />
                    <BulletList items={props.fit.ours.items.clone()} />
                </Card>
                <Card>
                    <Eyebrow text={AttrValue::from(props.fit.others.eyebrow.clone())} />
                    <BulletList items={props.fit.others.items.clone()} />
                </Card>
            </section>
        </>
    }
}
