use docent_core::entities::{MockResponse, Source};
use docent_core::enums::{SourceType, TrustBadge};

use crate::matcher::ResponseTable;

pub(super) fn table() -> ResponseTable {
    ResponseTable::new(fallback())
        .entry(["button", "btn"], button())
        .entry(["datatable", "data table", "table", "sorting"], data_table())
        .entry(["modal", "props"], modal())
}

fn button() -> MockResponse {
    MockResponse::new(
        r#"The Button component is one of Carbon's most used components.

**Import:**
```jsx
import { Button } from '@carbon/react';
```

**Basic usage:**
```jsx
<Button kind="primary">Primary button</Button>
<Button kind="secondary">Secondary button</Button>
<Button kind="tertiary">Tertiary button</Button>
<Button kind="ghost">Ghost button</Button>
<Button kind="danger">Danger button</Button>
```

**Key props:** [Official Rule]
- `kind`: 'primary' | 'secondary' | 'tertiary' | 'ghost' | 'danger'
- `size`: 'sm' | 'md' | 'lg' | 'xl' | '2xl'
- `disabled`: boolean
- `renderIcon`: Carbon icon component

**Accessibility:** [Best Practice]
Always include descriptive text content or an `aria-label` for icon-only buttons."#,
    )
    .with_sources(vec![
        Source::new(
            SourceType::Documentation,
            "Button — Carbon Design System",
            "https://carbondesignsystem.com/components/button/usage/",
        ),
        Source::new(
            SourceType::Storybook,
            "Button — Carbon React Storybook",
            "https://react.carbondesignsystem.com/?path=/story/components-button--default",
        ),
    ])
    .with_badges(&[TrustBadge::Official, TrustBadge::BestPractice])
}

fn data_table() -> MockResponse {
    MockResponse::new(
        r"**DataTable with sorting:**

```jsx
import { DataTable, Table, TableHead, TableRow, TableHeader, TableBody, TableCell } from '@carbon/react';

const headers = [
  { key: 'name', header: 'Name' },
  { key: 'status', header: 'Status' },
];
const rows = [
  { id: '1', name: 'Row 1', status: 'Active' },
  { id: '2', name: 'Row 2', status: 'Inactive' },
];

<DataTable rows={rows} headers={headers} isSortable>
  {({ rows, headers, getTableProps, getHeaderProps, getRowProps }) => (
    <Table {...getTableProps()}>
      <TableHead>
        <TableRow>
          {headers.map((header) => (
            <TableHeader {...getHeaderProps({ header })}>{header.header}</TableHeader>
          ))}
        </TableRow>
      </TableHead>
      <TableBody>
        {rows.map((row) => (
          <TableRow {...getRowProps({ row })}>
            {row.cells.map((cell) => (
              <TableCell key={cell.id}>{cell.value}</TableCell>
            ))}
          </TableRow>
        ))}
      </TableBody>
    </Table>
  )}
</DataTable>
```

[Official Rule] Use `isSortable` and the render prop pattern for controlled sorting.",
    )
    .with_sources(vec![
        Source::new(
            SourceType::Storybook,
            "DataTable — Carbon React Storybook",
            "https://react.carbondesignsystem.com/?path=/story/components-datatable--default",
        ),
        Source::new(
            SourceType::Documentation,
            "Data table — Carbon Design System",
            "https://carbondesignsystem.com/components/data-table/usage/",
        ),
    ])
    .with_badges(&[TrustBadge::Official])
}

fn modal() -> MockResponse {
    MockResponse::new(
        r#"**Modal component key props:** [Official Rule]

- `open`: boolean — controls visibility
- `passiveModal`: boolean — no footer/actions
- `danger`: boolean — danger styling
- `modalHeading`: string
- `modalLabel`: string (optional)
- `primaryButtonText`, `secondaryButtonText`
- `onRequestClose`: () => void
- `onRequestSubmit`: () => void

```jsx
import { Modal } from '@carbon/react';
<Modal open={isOpen} modalHeading="Confirm" primaryButtonText="Save" secondaryButtonText="Cancel" onRequestClose={() => setIsOpen(false)} onRequestSubmit={() => { /* save */ setIsOpen(false); }} />
```"#,
    )
    .with_sources(vec![
        Source::new(
            SourceType::Documentation,
            "Modal — Carbon Design System",
            "https://carbondesignsystem.com/components/modal/usage/",
        ),
        Source::new(
            SourceType::Storybook,
            "Modal — Carbon React Storybook",
            "https://react.carbondesignsystem.com/?path=/story/components-modal--default",
        ),
    ])
    .with_badges(&[TrustBadge::Official])
}

fn fallback() -> MockResponse {
    MockResponse::new(
        r#"I can help with component APIs, code snippets, props, and implementation patterns. Try: "How do I implement the DataTable with sorting?" or "What are the props for the Modal component?" [Flexible]"#,
    )
    .with_sources(vec![Source::new(
        SourceType::Storybook,
        "Carbon React Storybook",
        "https://react.carbondesignsystem.com",
    )])
    .with_badges(&[TrustBadge::Flexible])
}
